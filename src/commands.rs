//! Editor-level commands: insertion, alignment, enter-key handling, and
//! press redirection.
//!
//! Free functions over [`EditorHost`], shaped like host editor commands:
//! each returns whether it handled the request so hosts can chain
//! fallbacks. Everything that mutates the document goes through the host;
//! nothing here touches an element's projection directly.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use crate::attrs::{Align, IconOverrides, MediaAttributes};
use crate::config::{IconSet, MediaOptions};
use crate::consts::MIN_DIM_UNITS;
use crate::geometry::Point;
use crate::host::{EditorHost, NodeId};

/// Insertion request for a new media element.
#[derive(Debug, Clone, Default)]
pub struct InsertMedia {
    /// Asset location.
    pub source: String,
    /// Accessible description.
    pub alt_text: Option<String>,
    /// Tooltip text.
    pub title: Option<String>,
    /// Requested width; stored only when `height` is also given.
    pub width: Option<u32>,
    /// Requested height; stored only when `width` is also given.
    pub height: Option<u32>,
}

impl InsertMedia {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: None,
            title: None,
            width: None,
            height: None,
        }
    }
}

/// Insert a new media node at the host's current selection.
///
/// Menu visibility, menu placement, and icon overrides are snapshotted
/// from `options` into the node's attributes, so later configuration
/// changes leave existing nodes untouched. Explicit dimensions are stored
/// only when the request carries both, floored at the minimum; a one-sided
/// request stores neither and the configured default height applies at the
/// rendering layer.
pub fn insert_media(
    host: &mut impl EditorHost,
    options: &MediaOptions,
    request: &InsertMedia,
) -> bool {
    if request.source.is_empty() {
        tracing::warn!("media insert rejected, empty source");
        return false;
    }
    let mut attrs = MediaAttributes::new(request.source.clone());
    attrs.alt_text = request.alt_text.clone();
    attrs.title = request.title.clone();
    if let (Some(width), Some(height)) = (request.width, request.height) {
        attrs = attrs.with_size(width.max(MIN_DIM_UNITS), height.max(MIN_DIM_UNITS));
    }
    attrs.show_menu = Some(options.show_menu);
    attrs.menu_position = Some(options.menu_position);
    attrs.icons = snapshot_icons(&options.icons);

    let node = NodeId::new_v4();
    let inserted = host.insert_media_node(node, attrs);
    tracing::debug!(%node, source = %request.source, inserted, "media insert");
    inserted
}

/// Set or clear the alignment of the current selection. Applies only when
/// the selection is a media node.
pub fn set_alignment(host: &mut impl EditorHost, align: Option<Align>) -> bool {
    let Some(node) = host.selection().media_node() else {
        return false;
    };
    let Some(attrs) = host.media_attributes(node) else {
        return false;
    };
    tracing::debug!(%node, ?align, "alignment command");
    host.replace_attributes(node, attrs.with_align(align))
}

/// Enter pressed while a media node is selected: insert an empty block
/// right after it and move the caret inside. Returns `false` when nothing
/// applicable is selected or the host schema offers no such block.
pub fn handle_enter(host: &mut impl EditorHost) -> bool {
    let Some(node) = host.selection().media_node() else {
        return false;
    };
    host.insert_block_after(node)
}

/// Route a pointer press on the editing surface while a media node is
/// selected. A press inside the node's rendered bounds stays with default
/// handling; a press outside is redirected to a caret at the document
/// position under the pointer. Unresolvable positions fall through.
pub fn handle_surface_press(host: &mut impl EditorHost, at: Point) -> bool {
    let Some(node) = host.selection().media_node() else {
        return false;
    };
    if let Some(bounds) = host.node_bounds(node) {
        if bounds.contains(at) {
            return false;
        }
    }
    let Some(pos) = host.pos_at_point(at) else {
        return false;
    };
    tracing::debug!(%node, pos, "press redirected to caret");
    host.set_caret(pos)
}

/// Copy the four attribute-tier icon overrides out of the configured set.
fn snapshot_icons(icons: &IconSet) -> IconOverrides {
    IconOverrides {
        left: icons.left.clone(),
        center: icons.center.clone(),
        right: icons.right.clone(),
        clear: icons.clear.clone(),
    }
}
