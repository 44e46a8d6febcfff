//! Alignment → container layout mapping.
//!
//! The discrete `align` attribute folds into a tiny layout model the host
//! renderer can translate directly into its styling system: inline flow when
//! unaligned, otherwise a block-level container with the matching content
//! justification.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

use crate::attrs::Align;

/// How the element container participates in document flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    /// Sits beside sibling inline content.
    Inline,
    /// Occupies its own slot.
    Block,
}

/// Horizontal content justification inside a block container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    Start,
    Center,
    End,
}

/// Resolved layout for the element container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerLayout {
    /// Flow participation.
    pub display: Display,
    /// Justification; only meaningful for block display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify: Option<Justify>,
}

/// Map an alignment attribute to its container layout.
#[must_use]
pub fn alignment_layout(align: Option<Align>) -> ContainerLayout {
    match align {
        None => ContainerLayout { display: Display::Inline, justify: None },
        Some(Align::Left) => {
            ContainerLayout { display: Display::Block, justify: Some(Justify::Start) }
        }
        Some(Align::Center) => {
            ContainerLayout { display: Display::Block, justify: Some(Justify::Center) }
        }
        Some(Align::Right) => {
            ContainerLayout { display: Display::Block, justify: Some(Justify::End) }
        }
    }
}
