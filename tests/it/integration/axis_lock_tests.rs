//! Axis locking: a disabled axis stays pinned at its drag-start value.

use crate::helpers::{down, drag_move, draggable_at, record_phases, up};
use draggable::{DragPhase, Point};

#[test]
fn test_disabled_x_axis_pins_x_for_every_drag() {
    let (drag, el) = draggable_at(100.0, 100.0, 40.0, 40.0);
    drag.disable_x_axis();

    down(&drag, 110.0, 110.0);
    for (px, py) in [(300.0, 150.0), (-50.0, 400.0), (110.0, 90.0)] {
        drag_move(&drag, px, py);
        assert_eq!(el.position().x, 100.0);
        assert_eq!(el.position().y, py - 10.0);
    }
    up(&drag, 110.0, 90.0);

    assert_eq!(el.position(), Point::new(100.0, 80.0));
}

#[test]
fn test_disabled_y_axis_pins_y_for_every_drag() {
    let (drag, el) = draggable_at(100.0, 100.0, 40.0, 40.0);
    drag.disable_y_axis();

    down(&drag, 110.0, 110.0);
    for (px, py) in [(150.0, 300.0), (400.0, -50.0)] {
        drag_move(&drag, px, py);
        assert_eq!(el.position().x, px - 10.0);
        assert_eq!(el.position().y, 100.0);
    }
}

#[test]
fn test_both_axes_disabled_still_emits_drag() {
    let (drag, el) = draggable_at(100.0, 100.0, 40.0, 40.0);
    drag.disable_x_axis().disable_y_axis();
    let phases = record_phases(&drag);

    down(&drag, 110.0, 110.0);
    drag_move(&drag, 400.0, 400.0);
    drag_move(&drag, -400.0, -400.0);

    assert_eq!(el.position(), Point::new(100.0, 100.0));
    assert_eq!(
        *phases.borrow(),
        vec![DragPhase::Start, DragPhase::Drag, DragPhase::Drag]
    );
}

#[test]
fn test_axis_lock_applies_before_containment() {
    // Locked x keeps the element inside the box, so only y gets clamped.
    let (drag, el) = draggable_at(100.0, 100.0, 40.0, 40.0);
    let container = crate::helpers::FakeElement::new(0.0, 0.0, 200.0, 200.0);
    drag.disable_x_axis().set_containment(Some(container.handle()));

    down(&drag, 110.0, 110.0);
    drag_move(&drag, 400.0, 400.0);

    assert_eq!(el.position(), Point::new(100.0, 160.0));
}
