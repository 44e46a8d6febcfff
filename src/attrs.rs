//! Persisted attribute model: the authoritative description of one media
//! element as the host document stores it.
//!
//! Every mutation this crate performs goes through the commit protocol in
//! [`crate::element`]: build the complete next attribute set with one of the
//! `with_*` builders, then hand it to the host for a transactional replace.
//! Sparse patches are never sent, so unrelated fields can never be dropped by
//! a resize or an alignment change.

#[cfg(test)]
#[path = "attrs_test.rs"]
mod attrs_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::MIN_DIM_UNITS;

/// Horizontal alignment of the element within its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Where the alignment menu sits relative to the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuPosition {
    Above,
    Below,
}

/// Per-element glyph overrides for the alignment-menu buttons.
///
/// Absent entries defer to the configured icon set, then to the built-in
/// glyphs ([`crate::config`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconOverrides {
    /// Glyph for the align-left button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    /// Glyph for the align-center button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<String>,
    /// Glyph for the align-right button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    /// Glyph for the clear-alignment button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear: Option<String>,
}

impl IconOverrides {
    /// True when no override is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.center.is_none() && self.right.is_none() && self.clear.is_none()
    }
}

/// Validation failure for externally supplied attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// The asset source is empty.
    #[error("media source must not be empty")]
    EmptySource,
    /// Exactly one of width/height is set; they must come together.
    #[error("width and height must be set together or not at all")]
    LoneDimension,
    /// An explicit dimension sits below the minimum floor.
    #[error("dimension {value} is below the minimum of {MIN_DIM_UNITS}")]
    DimensionBelowFloor {
        /// The offending dimension value.
        value: u32,
    },
}

/// The full persisted attribute set for one media element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAttributes {
    /// Asset location (URL or host-resolved identifier).
    pub source: String,
    /// Accessibility text for the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// Advisory title. Persisted; no behavior attaches to it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Explicit rendered width in whole units. Set and cleared together
    /// with `height`, both at least the minimum floor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Explicit rendered height in whole units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Block alignment; `None` keeps the element in inline flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    /// Menu visibility; `None` defers to process configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_menu: Option<bool>,
    /// Menu placement; `None` defers to process configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_position: Option<MenuPosition>,
    /// Per-element glyph overrides.
    #[serde(default, skip_serializing_if = "IconOverrides::is_empty")]
    pub icons: IconOverrides,
}

impl MediaAttributes {
    /// Fresh attributes for `source` with the creation defaults: no explicit
    /// size, left alignment, menu settings deferred to configuration.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: None,
            title: None,
            width: None,
            height: None,
            align: Some(Align::Left),
            show_menu: None,
            menu_position: None,
            icons: IconOverrides::default(),
        }
    }

    /// Complete next attribute set with the explicit dimensions replaced.
    #[must_use]
    pub fn with_size(&self, width: u32, height: u32) -> Self {
        Self { width: Some(width), height: Some(height), ..self.clone() }
    }

    /// Complete next attribute set with the alignment replaced.
    #[must_use]
    pub fn with_align(&self, align: Option<Align>) -> Self {
        Self { align, ..self.clone() }
    }

    /// Whether both explicit dimensions are present.
    #[must_use]
    pub fn has_explicit_size(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }

    /// Aspect ratio (width / height) from the explicit dimensions, when both
    /// are present and the height is non-zero.
    #[must_use]
    pub fn explicit_aspect(&self) -> Option<f64> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if h > 0 => Some(f64::from(w) / f64::from(h)),
            _ => None,
        }
    }

    /// Check the attribute invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError`] when the source is empty, when exactly one
    /// dimension is set, or when a dimension sits below the minimum floor.
    pub fn validate(&self) -> Result<(), AttributeError> {
        if self.source.is_empty() {
            return Err(AttributeError::EmptySource);
        }
        match (self.width, self.height) {
            (Some(_), None) | (None, Some(_)) => Err(AttributeError::LoneDimension),
            (Some(w), Some(h)) => {
                for value in [w, h] {
                    if value < MIN_DIM_UNITS {
                        return Err(AttributeError::DimensionBelowFloor { value });
                    }
                }
                Ok(())
            }
            (None, None) => Ok(()),
        }
    }
}
