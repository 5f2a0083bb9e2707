//! Pointer-move handling - move math, containment clamping, apply.
//!
//! Move is the hot path of a drag: the host event loop can deliver
//! samples at display rate, so the handler is guard-first and computes
//! with plain session/config data.

use crate::draggable::Draggable;
use crate::input::coords;
use crate::notifier::DragPhase;
use crate::types::{EventStatus, PointerSample};

impl Draggable {
    /// Move the element to track a pointer-move sample.
    ///
    /// A no-op while no session is open, or when the external dragging
    /// indicator has been cleared out from under the controller (the
    /// indicator is the visible half of the session guard; an outside
    /// party clearing it cancels the gesture).
    pub fn handle_pointer_move(&self, sample: &PointerSample) -> EventStatus {
        let inner = self.inner.borrow();
        let Some(session) = inner.state.session().copied() else {
            return EventStatus::Ignored;
        };
        if !inner.el.is_dragging() {
            return EventStatus::Ignored;
        }

        let candidate = coords::candidate_position(sample.position, &session, &inner.config);
        let position = match inner.config.containment {
            Some(ref bounds) => coords::clamp_to_containment(
                candidate,
                inner.el.client_size(),
                bounds.client_size(),
            ),
            None => candidate,
        };
        tracing::trace!(x = position.x, y = position.y, "drag move");

        inner.el.translate(position.x, position.y);
        drop(inner);

        self.emit(DragPhase::Drag);
        EventStatus::Handled
    }
}
