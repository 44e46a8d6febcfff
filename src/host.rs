//! Host-facing surface: node identity, selection, document traits, and the
//! shell effects returned from event handlers.
//!
//! The document side is split into two traits. [`AttributeStore`] is the
//! narrow seam the commit protocol needs: transactional full-attribute
//! replacement addressed by node identity. [`EditorHost`] widens it with the
//! selection, schema, and caret queries the editor-level commands use. The
//! core mutates the document through these traits and no other path; shell
//! side-effects (pointer capture, repainting) are returned as [`Action`]
//! values instead of being performed.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use uuid::Uuid;

use crate::attrs::MediaAttributes;
use crate::geometry::Point;

/// Unique identity of a document node, stable across position shifts.
pub type NodeId = Uuid;

/// A position in the host document's addressing scheme.
pub type DocPos = usize;

/// Rendered bounds of an element on the interaction surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Whether `at` falls inside these bounds, edges inclusive.
    #[must_use]
    pub fn contains(&self, at: Point) -> bool {
        at.x >= self.left
            && at.x <= self.left + self.width
            && at.y >= self.top
            && at.y <= self.top + self.height
    }
}

/// The host editor's current selection, as this core needs to see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A media element is the active node-level selection.
    MediaNode(NodeId),
    /// Anything else: a caret, a text range, another node kind, or nothing.
    Other,
}

impl Selection {
    /// The selected media node, when that is what the selection is.
    #[must_use]
    pub fn media_node(self) -> Option<NodeId> {
        match self {
            Self::MediaNode(id) => Some(id),
            Self::Other => None,
        }
    }
}

/// Shell effects returned from event handlers for the host to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Route every pointer move and release to this element until the
    /// matching [`Action::ReleasePointer`].
    CapturePointer,
    /// End the routing started by [`Action::CapturePointer`].
    ReleasePointer,
    /// The projection changed; repaint the element.
    RenderNeeded,
}

/// Transactional attribute storage owned by the host document.
pub trait AttributeStore {
    /// Replace the complete attribute set of `node` in one undoable
    /// transaction, preserving node identity, at the node's current
    /// position. Returns `false` when the node no longer exists or the
    /// host rejects the transaction.
    fn replace_attributes(&mut self, node: NodeId, attrs: MediaAttributes) -> bool;
}

/// Selection, schema, and caret surface of the host editor.
pub trait EditorHost: AttributeStore {
    /// The current selection.
    fn selection(&self) -> Selection;

    /// Current attributes of a media node, when it exists.
    fn media_attributes(&self, node: NodeId) -> Option<MediaAttributes>;

    /// Insert a new media node with the given identity at the current
    /// selection. Returns `false` when the host cannot place it.
    fn insert_media_node(&mut self, node: NodeId, attrs: MediaAttributes) -> bool;

    /// Insert an empty paragraph-equivalent block immediately after `node`
    /// and move the caret into it. Returns `false` when the schema offers no
    /// such block.
    fn insert_block_after(&mut self, node: NodeId) -> bool;

    /// Place a text caret at `pos`. Returns `false` when the position is not
    /// addressable.
    fn set_caret(&mut self, pos: DocPos) -> bool;

    /// Resolve the document position under a surface point.
    fn pos_at_point(&self, at: Point) -> Option<DocPos>;

    /// Rendered bounds of `node`, when it is currently displayed.
    fn node_bounds(&self, node: NodeId) -> Option<Bounds>;
}
