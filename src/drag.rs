//! Resize gesture state machine types.
//!
//! `DragState` is the two-state machine the element controller drives: `Idle`
//! between gestures, `Dragging` from a handle press to the matching release.
//! The session carries everything a move needs to compute the new size from
//! scratch, so bursty or repeated move events cannot accumulate drift.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::geometry::{HandleDirection, Point, Size};

/// Context for one active resize gesture, captured at handle press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Which handle is held.
    pub direction: HandleDirection,
    /// Pointer position at press, in surface units.
    pub start_pointer: Point,
    /// Rendered size at press. Fixed for the whole gesture; never updated
    /// by moves.
    pub start: Size,
    /// Whether moves hold the aspect ratio captured at press.
    pub keep_aspect: bool,
}

impl DragSession {
    /// Pointer delta of `at` relative to the press position.
    #[must_use]
    pub fn delta(&self, at: Point) -> (f64, f64) {
        (at.x - self.start_pointer.x, at.y - self.start_pointer.y)
    }
}

/// The resize gesture state for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No gesture in progress; waiting for a handle press.
    Idle,
    /// A handle is held; moves update the live preview size.
    Dragging(DragSession),
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}

impl DragState {
    /// The active session, if a gesture is in progress.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}
