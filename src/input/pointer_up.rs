//! Pointer-up handling - finalize the session.

use crate::draggable::Draggable;
use crate::notifier::DragPhase;
use crate::types::{EventStatus, PointerSample};

impl Draggable {
    /// Close the open drag session.
    ///
    /// Same guard as move: a no-op with no session, or when the dragging
    /// indicator was cleared externally. Session data is discarded; the
    /// element keeps its last applied position.
    pub fn handle_pointer_up(&self, _sample: &PointerSample) -> EventStatus {
        let mut inner = self.inner.borrow_mut();
        if !inner.state.is_dragging() {
            return EventStatus::Ignored;
        }
        if !inner.el.is_dragging() {
            return EventStatus::Ignored;
        }

        inner.state.reset();
        inner.el.set_dragging(false);
        tracing::debug!("drag session closed");
        drop(inner);

        self.emit(DragPhase::End);
        EventStatus::Handled
    }
}
