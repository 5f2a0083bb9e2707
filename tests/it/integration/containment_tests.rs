//! Containment: the dragged element's box never escapes the container.

use crate::helpers::{FakeElement, down, drag_move, draggable_at};
use draggable::Point;

#[test]
fn test_overshoot_clamps_to_container_edges() {
    // Element at (100, 100) sized 40x40, container 200x200, grab 10
    // pixels into the element. Dragging to (400, 400) projects past both
    // far edges and lands on the free extent.
    let (drag, el) = draggable_at(100.0, 100.0, 40.0, 40.0);
    let container = FakeElement::new(0.0, 0.0, 200.0, 200.0);
    drag.set_containment(Some(container.handle()));

    down(&drag, 110.0, 110.0);
    drag_move(&drag, 400.0, 400.0);

    assert_eq!(el.position(), Point::new(160.0, 160.0));
}

#[test]
fn test_position_stays_within_free_extent_for_any_pointer() {
    let (drag, el) = draggable_at(100.0, 100.0, 40.0, 40.0);
    let container = FakeElement::new(0.0, 0.0, 200.0, 200.0);
    drag.set_containment(Some(container.handle()));

    down(&drag, 110.0, 110.0);
    let mut px = -500.0;
    while px <= 700.0 {
        let mut py = -500.0;
        while py <= 700.0 {
            drag_move(&drag, px, py);
            let pos = el.position();
            assert!((0.0..=160.0).contains(&pos.x), "x out of bounds: {pos:?}");
            assert!((0.0..=160.0).contains(&pos.y), "y out of bounds: {pos:?}");
            py += 100.0;
        }
        px += 100.0;
    }
}

#[test]
fn test_degenerate_container_resolves_to_upper_bound() {
    // Container narrower than the element: when the projection trips the
    // far edge the result is the negative free width, confirming the
    // upper-bound clamp wins over the lower bound.
    let (drag, el) = draggable_at(100.0, 100.0, 40.0, 40.0);
    let container = FakeElement::new(0.0, 0.0, 10.0, 200.0);
    drag.set_containment(Some(container.handle()));

    down(&drag, 110.0, 110.0);
    drag_move(&drag, 5.0, 60.0);

    assert_eq!(el.position(), Point::new(-30.0, 50.0));
}

#[test]
fn test_moves_inside_the_container_are_untouched() {
    let (drag, el) = draggable_at(100.0, 100.0, 40.0, 40.0);
    let container = FakeElement::new(0.0, 0.0, 200.0, 200.0);
    drag.set_containment(Some(container.handle()));

    down(&drag, 110.0, 110.0);
    drag_move(&drag, 60.0, 170.0);

    assert_eq!(el.position(), Point::new(50.0, 160.0));
}

#[test]
fn test_clearing_containment_mid_session_unclamps() {
    let (drag, el) = draggable_at(100.0, 100.0, 40.0, 40.0);
    let container = FakeElement::new(0.0, 0.0, 200.0, 200.0);
    drag.set_containment(Some(container.handle()));

    down(&drag, 110.0, 110.0);
    drag_move(&drag, 400.0, 400.0);
    assert_eq!(el.position(), Point::new(160.0, 160.0));

    drag.set_containment(None);
    drag_move(&drag, 400.0, 400.0);
    assert_eq!(el.position(), Point::new(390.0, 390.0));
}

#[test]
fn test_setting_containment_mid_session_clamps_next_move() {
    let (drag, el) = draggable_at(100.0, 100.0, 40.0, 40.0);

    down(&drag, 110.0, 110.0);
    drag_move(&drag, 400.0, 400.0);
    assert_eq!(el.position(), Point::new(390.0, 390.0));

    let container = FakeElement::new(0.0, 0.0, 200.0, 200.0);
    drag.set_containment(Some(container.handle()));
    drag_move(&drag, 410.0, 410.0);
    assert_eq!(el.position(), Point::new(160.0, 160.0));
}
