//! Value-level projection of the rendered element.
//!
//! `MediaWidget` describes what the host should currently be showing: the
//! container layout, the image view with its size resolution, and the
//! conditionally mounted selection chrome (handle overlay, alignment menu)
//! and preview modal. It is derived state only: the authoritative attribute
//! set lives with the host document, and [`MediaWidget::reconcile`] folds
//! every attribute change back into this model. Reconciliation is
//! idempotent: the same attributes applied twice leave the widget unchanged.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use crate::attrs::{MediaAttributes, MenuPosition};
use crate::config::{self, MediaOptions, MenuButton};
use crate::geometry::{HandleDirection, Size};
use crate::layout::{ContainerLayout, alignment_layout};

/// The image view inside the element container.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageView {
    /// Asset location currently shown.
    pub source: String,
    /// Accessibility text.
    pub alt_text: Option<String>,
    /// Advisory title.
    pub title: Option<String>,
    /// Explicit size from attributes, when both dimensions are set.
    pub explicit: Option<Size>,
    /// Configured fallback height, applied only without an explicit size.
    pub fallback_height: Option<f64>,
    /// Live drag preview; overrides everything while a gesture runs.
    pub live: Option<Size>,
    /// Intrinsic size reported by the loaded asset.
    pub natural: Option<Size>,
}

impl ImageView {
    /// The size the host is currently rendering this image at.
    ///
    /// Resolution order: live drag preview, explicit attribute size,
    /// fallback height (width follows the intrinsic proportions), intrinsic
    /// size. `None` until the asset has reported dimensions that make the
    /// size determinable.
    #[must_use]
    pub fn rendered_size(&self) -> Option<Size> {
        if let Some(live) = self.live {
            return Some(live);
        }
        if let Some(explicit) = self.explicit {
            return Some(explicit);
        }
        if let Some(height) = self.fallback_height {
            if let Some(natural) = self.natural {
                if natural.height > 0.0 {
                    let width = (height * natural.width / natural.height).round();
                    return Some(Size::new(width, height));
                }
            }
            return None;
        }
        self.natural
    }
}

/// The eight resize handles, present only while the element is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleOverlay {
    /// Handles in layout order, clockwise from north.
    pub handles: [HandleDirection; 8],
}

impl Default for HandleOverlay {
    fn default() -> Self {
        Self { handles: HandleDirection::ALL }
    }
}

/// One alignment-menu button as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Which button this is.
    pub button: MenuButton,
    /// Resolved glyph or label.
    pub glyph: String,
}

/// The alignment menu, present only while selected and effectively shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    /// Placement relative to the element edge.
    pub position: MenuPosition,
    /// Buttons in display order, after configured suppression.
    pub entries: Vec<MenuEntry>,
}

/// Full-size preview surface, attached to the rendering root while open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewModal {
    /// Asset shown, kept in sync with the element source.
    pub source: String,
}

/// Everything the host should currently render for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaWidget {
    /// Container flow and justification derived from the alignment.
    pub layout: ContainerLayout,
    /// Whether the element is the active node selection.
    pub selected: bool,
    /// Native drag-reposition stays enabled on the container; the host
    /// manages the actual document move.
    pub draggable: bool,
    /// Cached aspect ratio (width / height) for drag locking and presets.
    /// Preserved across reconciles that clear the explicit dimensions.
    pub aspect: Option<f64>,
    /// The image view.
    pub image: ImageView,
    /// Resize handles, mounted while selected.
    pub overlay: Option<HandleOverlay>,
    /// Alignment menu, mounted while selected and effectively shown.
    pub menu: Option<Menu>,
    /// Preview modal, singleton per element.
    pub modal: Option<PreviewModal>,
}

impl MediaWidget {
    /// Build the initial projection for `attrs` under `options`.
    #[must_use]
    pub fn new(attrs: &MediaAttributes, options: &MediaOptions) -> Self {
        let mut widget = Self {
            layout: alignment_layout(attrs.align),
            selected: false,
            draggable: true,
            aspect: attrs.explicit_aspect(),
            image: ImageView {
                source: attrs.source.clone(),
                alt_text: attrs.alt_text.clone(),
                title: attrs.title.clone(),
                explicit: None,
                fallback_height: None,
                live: None,
                natural: None,
            },
            overlay: None,
            menu: None,
            modal: None,
        };
        widget.reconcile(attrs, options);
        widget
    }

    /// Fold an attribute change into the rendered state.
    ///
    /// Updates the image fields, explicit dimensions (clearing them falls
    /// back to the intrinsic size), container layout, the menu (re-resolved
    /// while selected, so a committed visibility change takes effect), and
    /// the modal's source. The cached aspect is recomputed when both
    /// dimensions are present and preserved otherwise. Clears any live drag
    /// preview: the attributes are now the truth.
    pub fn reconcile(&mut self, attrs: &MediaAttributes, options: &MediaOptions) {
        self.image.source = attrs.source.clone();
        self.image.alt_text = attrs.alt_text.clone();
        self.image.title = attrs.title.clone();
        self.image.explicit = match (attrs.width, attrs.height) {
            (Some(w), Some(h)) => Some(Size::new(f64::from(w), f64::from(h))),
            _ => None,
        };
        self.image.fallback_height = if self.image.explicit.is_none() {
            options.default_height.map(f64::from)
        } else {
            None
        };
        self.image.live = None;
        if let Some(aspect) = attrs.explicit_aspect() {
            self.aspect = Some(aspect);
        }
        self.layout = alignment_layout(attrs.align);
        if self.selected {
            self.menu = resolve_menu(attrs, options);
        }
        if let Some(modal) = self.modal.as_mut() {
            modal.source = attrs.source.clone();
        }
    }

    /// Mount the selection chrome. The menu mounts only when the effective
    /// show-menu flag resolves true.
    pub fn select(&mut self, attrs: &MediaAttributes, options: &MediaOptions) {
        self.selected = true;
        self.overlay = Some(HandleOverlay::default());
        self.menu = resolve_menu(attrs, options);
    }

    /// Unmount the selection chrome. Safe when already unmounted.
    pub fn deselect(&mut self) {
        self.selected = false;
        self.overlay = None;
        self.menu = None;
    }

    /// Apply a live, uncommitted preview size during a drag.
    pub fn set_live_size(&mut self, size: Size) {
        self.image.live = Some(size);
    }

    /// Record the intrinsic size reported by the loaded asset. Derives the
    /// aspect when none is cached yet; zero-sized reports are ignored.
    pub fn set_natural_size(&mut self, natural: Size) {
        if natural.width > 0.0 && natural.height > 0.0 {
            if self.aspect.is_none() {
                self.aspect = Some(natural.width / natural.height);
            }
            self.image.natural = Some(natural);
        }
    }

    /// Open the preview modal. Idempotent; at most one per element.
    pub fn open_modal(&mut self) {
        if self.modal.is_none() {
            self.modal = Some(PreviewModal { source: self.image.source.clone() });
        }
    }

    /// Close the preview modal. Safe when not open.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }
}

/// The menu to mount for a selected element, `None` when effectively hidden.
fn resolve_menu(attrs: &MediaAttributes, options: &MediaOptions) -> Option<Menu> {
    config::effective_show_menu(attrs, options).then(|| build_menu(attrs, options))
}

/// Build the menu model for the current attributes and configuration.
fn build_menu(attrs: &MediaAttributes, options: &MediaOptions) -> Menu {
    let entries = MenuButton::ALL
        .into_iter()
        .filter(|button| !options.hidden_buttons.hides(*button))
        .map(|button| MenuEntry { button, glyph: config::effective_icon(button, attrs, options) })
        .collect();
    Menu { position: config::effective_menu_position(attrs, options), entries }
}
