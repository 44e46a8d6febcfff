//! Per-node controller: selection, the drag machine, and the commit protocol.
//!
//! `MediaElement` is the live counterpart of one media node in the host
//! document. Events arrive here already routed: the host shell knows which
//! handle was pressed and which menu button was clicked. Document mutations
//! leave through [`AttributeStore`] as complete attribute sets; shell
//! side-effects (pointer capture, repaint requests) are returned as
//! [`Action`] values for the caller to perform.
//!
//! A commit never touches the projection directly. The host applies the
//! transaction, then hands the new attributes back via
//! [`MediaElement::apply_attrs`], and the widget reconciles. An undo or a
//! collaborative edit takes the same path.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use crate::attrs::{Align, MediaAttributes};
use crate::config::{MediaOptions, MenuButton};
use crate::consts::MIN_DIM_UNITS;
use crate::drag::{DragSession, DragState};
use crate::geometry::{self, HandleDirection, Point, Size};
use crate::host::{Action, AttributeStore, NodeId};
use crate::widget::MediaWidget;

/// Live controller for one media element instance.
pub struct MediaElement {
    /// Identity of the document node this element renders.
    pub node: NodeId,
    /// Mirror of the node's current attributes. The authoritative copy
    /// lives with the host document.
    pub attrs: MediaAttributes,
    /// Configuration snapshot taken at construction.
    pub options: MediaOptions,
    /// Rendered-state projection.
    pub widget: MediaWidget,
    /// Resize gesture state.
    pub drag: DragState,
    /// Whether the surface pointer capture is currently held.
    pub pointer_captured: bool,
    /// Set once destroyed; all further events are no-ops.
    pub destroyed: bool,
}

impl MediaElement {
    /// Build the element for `node` with its current attributes.
    #[must_use]
    pub fn new(node: NodeId, attrs: MediaAttributes, options: MediaOptions) -> Self {
        let widget = MediaWidget::new(&attrs, &options);
        Self {
            node,
            attrs,
            options,
            widget,
            drag: DragState::Idle,
            pointer_captured: false,
            destroyed: false,
        }
    }

    // --- Selection ---

    /// The host made this element the active node selection: mount the
    /// resize overlay and, when effectively shown, the alignment menu.
    pub fn select(&mut self) -> Vec<Action> {
        if self.destroyed {
            return Vec::new();
        }
        self.widget.select(&self.attrs, &self.options);
        vec![Action::RenderNeeded]
    }

    /// The host moved the selection elsewhere: unmount the chrome. An
    /// active drag session survives; its release still commits.
    pub fn deselect(&mut self) -> Vec<Action> {
        if self.destroyed {
            return Vec::new();
        }
        self.widget.deselect();
        vec![Action::RenderNeeded]
    }

    // --- Resize gesture ---

    /// Pointer press on a resize handle. Starts a gesture from the current
    /// rendered size; a press while one is already active is ignored.
    pub fn on_handle_press(&mut self, direction: HandleDirection, at: Point) -> Vec<Action> {
        if self.destroyed || self.drag.is_dragging() {
            return Vec::new();
        }
        let start = self.widget.image.rendered_size().unwrap_or(Size::new(0.0, 0.0));
        self.drag = DragState::Dragging(DragSession {
            direction,
            start_pointer: at,
            start,
            keep_aspect: true,
        });
        self.pointer_captured = true;
        tracing::debug!(
            node = %self.node,
            ?direction,
            width = start.width,
            height = start.height,
            "resize started"
        );
        vec![Action::CapturePointer]
    }

    /// Pointer moved while captured. Recomputes the live preview size from
    /// the fixed session start values; never mutates the document.
    pub fn on_surface_move(&mut self, at: Point) -> Vec<Action> {
        if self.destroyed {
            return Vec::new();
        }
        let Some(session) = self.drag.session().copied() else {
            return Vec::new();
        };
        let (dx, dy) = session.delta(at);
        let next = geometry::resize(
            session.direction,
            session.start,
            dx,
            dy,
            self.widget.aspect,
            session.keep_aspect,
        );
        if self.widget.image.live == Some(next) {
            return Vec::new();
        }
        self.widget.set_live_size(next);
        tracing::trace!(node = %self.node, width = next.width, height = next.height, "live resize");
        vec![Action::RenderNeeded]
    }

    /// Pointer released: end the gesture and commit the final rendered size.
    ///
    /// The committed dimensions come from the widget, not the last computed
    /// value, so any rendering-layer clamping is what gets persisted.
    pub fn on_surface_release(&mut self, store: &mut impl AttributeStore) -> Vec<Action> {
        if self.destroyed || !self.drag.is_dragging() {
            return Vec::new();
        }
        self.drag = DragState::Idle;
        let actions = self.release_capture();
        if let Some(size) = self.widget.image.rendered_size() {
            let (width, height) = size.rounded();
            let width = width.max(MIN_DIM_UNITS);
            let height = height.max(MIN_DIM_UNITS);
            tracing::debug!(node = %self.node, width, height, "resize committed");
            let next = self.attrs.with_size(width, height);
            self.commit(store, next);
        }
        actions
    }

    // --- Menu ---

    /// A click on one of the alignment-menu buttons, routed by the host.
    pub fn on_menu_click(&mut self, store: &mut impl AttributeStore, button: MenuButton) -> Vec<Action> {
        if self.destroyed {
            return Vec::new();
        }
        match button {
            MenuButton::Left => self.commit_align(store, Some(Align::Left)),
            MenuButton::Center => self.commit_align(store, Some(Align::Center)),
            MenuButton::Right => self.commit_align(store, Some(Align::Right)),
            MenuButton::Clear => self.commit_align(store, None),
            MenuButton::Preview => self.open_preview(),
            MenuButton::Size50 => self.commit_preset(store, 0.5),
            MenuButton::Size100 => self.commit_preset(store, 1.0),
        }
    }

    // --- Preview modal ---

    /// Open the full-size preview. Idempotent singleton.
    pub fn open_preview(&mut self) -> Vec<Action> {
        if self.destroyed || self.widget.modal.is_some() {
            return Vec::new();
        }
        self.widget.open_modal();
        vec![Action::RenderNeeded]
    }

    /// Close the preview (backdrop or close-control press). Safe when the
    /// modal is not open.
    pub fn close_preview(&mut self) -> Vec<Action> {
        if self.destroyed || self.widget.modal.is_none() {
            return Vec::new();
        }
        self.widget.close_modal();
        vec![Action::RenderNeeded]
    }

    // --- Reconciliation ---

    /// Fold an attribute change applied by the host (one of our commits, an
    /// undo, a collaborative edit) into the mirror and the projection.
    /// Returns `false` (and changes nothing) for invalid attribute sets.
    pub fn apply_attrs(&mut self, attrs: &MediaAttributes) -> bool {
        if self.destroyed {
            return false;
        }
        if let Err(error) = attrs.validate() {
            tracing::warn!(node = %self.node, %error, "rejected attribute update");
            return false;
        }
        self.attrs = attrs.clone();
        self.widget.reconcile(&self.attrs, &self.options);
        tracing::debug!(node = %self.node, "attributes reconciled");
        true
    }

    /// The asset reported its intrinsic dimensions.
    pub fn on_image_loaded(&mut self, natural_width: f64, natural_height: f64) -> Vec<Action> {
        if self.destroyed {
            return Vec::new();
        }
        self.widget.set_natural_size(Size::new(natural_width, natural_height));
        vec![Action::RenderNeeded]
    }

    // --- Teardown ---

    /// Tear the element down: abandon any active gesture without committing,
    /// release the pointer capture exactly once, close the modal, unmount
    /// the chrome. Idempotent; all later events are no-ops.
    pub fn destroy(&mut self) -> Vec<Action> {
        if self.destroyed {
            return Vec::new();
        }
        self.destroyed = true;
        self.drag = DragState::Idle;
        let actions = self.release_capture();
        self.widget.close_modal();
        self.widget.deselect();
        tracing::debug!(node = %self.node, "element destroyed");
        actions
    }

    // --- Internals ---

    fn commit_align(&mut self, store: &mut impl AttributeStore, align: Option<Align>) -> Vec<Action> {
        tracing::debug!(node = %self.node, ?align, "alignment committed");
        let next = self.attrs.with_align(align);
        self.commit(store, next);
        Vec::new()
    }

    fn commit_preset(&mut self, store: &mut impl AttributeStore, fraction: f64) -> Vec<Action> {
        let Some(current) = self.widget.image.rendered_size() else {
            tracing::debug!(node = %self.node, fraction, "preset resize skipped, size unknown");
            return Vec::new();
        };
        let natural_width = self.widget.image.natural.map(|n| n.width);
        let target = geometry::preset_size(natural_width, current, self.widget.aspect, fraction);
        let (width, height) = target.rounded();
        tracing::debug!(node = %self.node, fraction, width, height, "preset resize committed");
        let next = self.attrs.with_size(width, height);
        self.commit(store, next);
        Vec::new()
    }

    /// Submit a complete next attribute set through the store. The mirror
    /// and projection update only when the host applies the transaction and
    /// calls [`Self::apply_attrs`].
    fn commit(&mut self, store: &mut impl AttributeStore, next: MediaAttributes) -> bool {
        let applied = store.replace_attributes(self.node, next);
        if !applied {
            tracing::warn!(node = %self.node, "attribute commit rejected by host");
        }
        applied
    }

    /// Release the pointer capture exactly once.
    fn release_capture(&mut self) -> Vec<Action> {
        if self.pointer_captured {
            self.pointer_captured = false;
            vec![Action::ReleasePointer]
        } else {
            Vec::new()
        }
    }
}
