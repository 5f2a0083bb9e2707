//! Move math for drag operations.
//!
//! Centralizes the pointer-to-offset formulas so the handlers stay free
//! of raw coordinate arithmetic. Everything here is a pure function of
//! its arguments.

use crate::config::DraggableConfig;
use crate::input::state::DragSession;
use crate::types::{Point, Size};

/// Candidate absolute offset position for the element, given the live
/// pointer and the session baselines.
///
/// A locked axis is pinned to the session's `origin_offset` constant
/// instead of tracking the pointer.
#[inline]
pub fn candidate_position(
    pointer: Point,
    session: &DragSession,
    config: &DraggableConfig,
) -> Point {
    Point::new(
        if config.x_axis {
            pointer.x - session.grab.x
        } else {
            session.origin_offset.x
        },
        if config.y_axis {
            pointer.y - session.grab.y
        } else {
            session.origin_offset.y
        },
    )
}

/// Clamp a candidate position so the element's box stays inside the
/// containment box.
///
/// Both bound checks read the projected edges computed from the
/// *unclamped* candidate, and the lower bound is applied before the
/// upper bound. For a containment box smaller than the element both
/// bounds trip on the same frame and the upper-bound value wins,
/// matching the original behavior.
#[inline]
pub fn clamp_to_containment(candidate: Point, element: Size, bounds: Size) -> Point {
    let projected_right = candidate.x + element.width;
    let projected_bottom = candidate.y + element.height;
    let free_width = bounds.width - element.width;
    let free_height = bounds.height - element.height;

    let mut x = if candidate.x <= 0.0 { 0.0 } else { candidate.x };
    let mut y = if candidate.y <= 0.0 { 0.0 } else { candidate.y };
    if projected_bottom >= bounds.height {
        y = free_height;
    }
    if projected_right >= bounds.width {
        x = free_width;
    }

    Point::new(x, y)
}
