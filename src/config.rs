//! Process-wide defaults and three-tier option resolution.
//!
//! Menu visibility, placement, and button glyphs resolve with a fixed
//! precedence: the element's own attribute when set, else the configured
//! option, else the built-in default. The resolution lives here as plain
//! functions so the precedence is testable in isolation instead of being
//! scattered through the widget code as fallback chains.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::attrs::{MediaAttributes, MenuPosition};

// ── Built-in defaults ───────────────────────────────────────────

/// Built-in glyph for the align-left button.
pub const GLYPH_LEFT: &str = "⟸";
/// Built-in glyph for the align-center button.
pub const GLYPH_CENTER: &str = "⇔";
/// Built-in glyph for the align-right button.
pub const GLYPH_RIGHT: &str = "⟹";
/// Built-in glyph for the clear-alignment button.
pub const GLYPH_CLEAR: &str = "x";
/// Built-in glyph for the preview button.
pub const GLYPH_PREVIEW: &str = "🔍";
/// Fixed label for the half-size preset button.
pub const LABEL_SIZE_50: &str = "50%";
/// Fixed label for the natural-size preset button.
pub const LABEL_SIZE_100: &str = "100%";

/// One of the alignment-menu buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuButton {
    Left,
    Center,
    Right,
    Clear,
    Preview,
    Size50,
    Size100,
}

impl MenuButton {
    /// All menu buttons in display order.
    pub const ALL: [Self; 7] = [
        Self::Left,
        Self::Center,
        Self::Right,
        Self::Clear,
        Self::Preview,
        Self::Size50,
        Self::Size100,
    ];
}

/// Configured glyph overrides, applied between attribute overrides and the
/// built-in glyphs. The preset buttons keep their fixed labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSet {
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
    /// Glyph for the preview button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// Per-button suppression for the alignment menu. A hidden button is absent
/// from the reconciled menu, not merely disabled.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiddenButtons {
    pub left: bool,
    pub center: bool,
    pub right: bool,
    pub clear: bool,
    pub preview: bool,
    pub size50: bool,
    pub size100: bool,
}

impl HiddenButtons {
    /// Whether `button` is suppressed.
    #[must_use]
    pub fn hides(self, button: MenuButton) -> bool {
        match button {
            MenuButton::Left => self.left,
            MenuButton::Center => self.center,
            MenuButton::Right => self.right,
            MenuButton::Clear => self.clear,
            MenuButton::Preview => self.preview,
            MenuButton::Size50 => self.size50,
            MenuButton::Size100 => self.size100,
        }
    }
}

/// Process-wide defaults for media elements.
///
/// Hosts build one at startup and hand it to [`crate::element::MediaElement`]
/// and the insertion command. Elements snapshot it; later configuration
/// changes affect only elements created afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaOptions {
    /// Rendered height fallback for elements without explicit dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_height: Option<u32>,
    /// Menu visibility for elements whose attribute is unset.
    pub show_menu: bool,
    /// Menu placement for elements whose attribute is unset.
    pub menu_position: MenuPosition,
    /// Configured glyph overrides.
    pub icons: IconSet,
    /// Buttons removed from the menu entirely.
    pub hidden_buttons: HiddenButtons,
}

impl Default for MediaOptions {
    fn default() -> Self {
        Self {
            default_height: None,
            show_menu: true,
            menu_position: MenuPosition::Below,
            icons: IconSet::default(),
            hidden_buttons: HiddenButtons::default(),
        }
    }
}

// ── Three-tier resolution ───────────────────────────────────────

/// Effective menu visibility: attribute, else option.
#[must_use]
pub fn effective_show_menu(attrs: &MediaAttributes, options: &MediaOptions) -> bool {
    attrs.show_menu.unwrap_or(options.show_menu)
}

/// Effective menu placement: attribute, else option.
#[must_use]
pub fn effective_menu_position(attrs: &MediaAttributes, options: &MediaOptions) -> MenuPosition {
    attrs.menu_position.unwrap_or(options.menu_position)
}

/// Effective glyph for `button`: attribute override, else configured
/// override, else the built-in. The preview button has no attribute tier,
/// and the preset buttons resolve to their fixed labels.
#[must_use]
pub fn effective_icon(
    button: MenuButton,
    attrs: &MediaAttributes,
    options: &MediaOptions,
) -> String {
    let (attr, option, built_in) = match button {
        MenuButton::Left => (attrs.icons.left.as_deref(), options.icons.left.as_deref(), GLYPH_LEFT),
        MenuButton::Center => {
            (attrs.icons.center.as_deref(), options.icons.center.as_deref(), GLYPH_CENTER)
        }
        MenuButton::Right => {
            (attrs.icons.right.as_deref(), options.icons.right.as_deref(), GLYPH_RIGHT)
        }
        MenuButton::Clear => {
            (attrs.icons.clear.as_deref(), options.icons.clear.as_deref(), GLYPH_CLEAR)
        }
        MenuButton::Preview => (None, options.icons.preview.as_deref(), GLYPH_PREVIEW),
        MenuButton::Size50 => (None, None, LABEL_SIZE_50),
        MenuButton::Size100 => (None, None, LABEL_SIZE_100),
    };
    attr.or(option).unwrap_or(built_in).to_owned()
}
