//! Resizable embedded-media element core for a rich-text document editor.
//!
//! This crate is headless. It owns the interactive geometry of an embedded
//! media element: the eight-handle resize state machine with aspect locking,
//! the alignment/layout model, selection-scoped overlay and menu visibility,
//! and the commit protocol that folds transient pointer-driven visual state
//! back into the host document's authoritative attributes. The host editor is
//! responsible for real rendering, event capture and hit-testing, and for
//! applying the document mutations this core requests through
//! [`host::AttributeStore`] and [`host::EditorHost`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`element`] | Per-node controller: selection, drag machine, commits |
//! | [`commands`] | Editor-level commands: insert, alignment, enter key, press redirection |
//! | [`widget`] | Value-level projection of the rendered widget, reconciled from attributes |
//! | [`attrs`] | Persisted attribute model and validation |
//! | [`config`] | Process-wide defaults and three-tier option resolution |
//! | [`geometry`] | Pure resize and preset-size math |
//! | [`layout`] | Alignment → container layout mapping |
//! | [`drag`] | Resize gesture state machine types |
//! | [`host`] | Host-facing traits, ids, selection, and shell effects |
//! | [`consts`] | Shared numeric constants (dimension floor, menu offset) |

pub mod attrs;
pub mod commands;
pub mod config;
pub mod consts;
pub mod drag;
pub mod element;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod widget;
