//! Drag state machine and session data.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging   (primary-button pointer-down on the handle)
//! Dragging -> Dragging   (pointer-down again re-captures the session)
//! Dragging -> Idle       (pointer-up, or teardown via destroy())
//! ```
//!
//! The controller is long-lived: it cycles back to `Idle` after every
//! session and can run any number of sessions until destroyed.

use crate::types::{Point, Rect};

/// Baseline geometry captured at pointer-down, immutable for the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Bounding rectangle of the element at session start.
    pub origin_rect: Rect,

    /// Bounding-rect position minus the element's static offset position.
    /// This is the translation already applied to the element when the
    /// session started, and the constant a locked axis is pinned to.
    pub origin_offset: Point,

    /// Pointer position relative to the bounding rectangle at session
    /// start.
    pub grab: Point,
}

impl DragSession {
    /// Capture session baselines from down-time geometry.
    pub fn capture(rect: Rect, offset_position: Point, pointer: Point) -> Self {
        Self {
            origin_rect: rect,
            origin_offset: Point::new(rect.left - offset_position.x, rect.top - offset_position.y),
            grab: Point::new(pointer.x - rect.left, pointer.y - rect.top),
        }
    }
}

/// Controller state: a session exists iff the state is `Dragging`.
#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// No active input operation
    #[default]
    Idle,

    /// A drag session is open
    Dragging(DragSession),
}

impl DragState {
    /// Returns true if a drag session is open.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Returns true if the state is Idle.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Open a session (or replace the current one).
    pub fn begin(&mut self, session: DragSession) {
        *self = Self::Dragging(session);
    }

    /// Reset to Idle state.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
