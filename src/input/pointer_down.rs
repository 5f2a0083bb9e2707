//! Pointer-down handling - session capture and drag start.

use crate::draggable::Draggable;
use crate::input::state::DragSession;
use crate::notifier::DragPhase;
use crate::types::{EventStatus, PointerButton, PointerSample};

impl Draggable {
    /// Open (or re-capture) a drag session from a pointer-down sample.
    ///
    /// Ignored unless the controller is bound and the sample carries the
    /// primary button. Returns `Handled` when a session opens, which the
    /// host uses to suppress the native default action.
    pub fn handle_pointer_down(&self, sample: &PointerSample) -> EventStatus {
        let mut inner = self.inner.borrow_mut();
        if !inner.bound {
            return EventStatus::Ignored;
        }
        if sample.button != PointerButton::Primary {
            // Do not process right-click or auxiliary buttons.
            return EventStatus::Ignored;
        }

        let rect = inner.el.bounding_rect();
        let offset = inner.el.offset_position();
        let session = DragSession::capture(rect, offset, sample.position);
        tracing::debug!(
            grab_x = session.grab.x,
            grab_y = session.grab.y,
            "drag session opened"
        );

        inner.state.begin(session);
        inner.el.set_dragging(true);
        drop(inner);

        self.emit(DragPhase::Start);
        EventStatus::Handled
    }
}
