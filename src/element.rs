//! Collaborator traits for the dragged element.
//!
//! The controller never touches a concrete UI toolkit. It sees an element
//! through two narrow interfaces: a geometry query and a visual surface
//! (transform plus a boolean "dragging" indicator). Hosts implement these
//! over their DOM node, widget handle, or whatever else renders the
//! element; tests implement them with in-memory fakes.

use std::rc::Rc;

use crate::types::{Point, Rect, Size};

/// Read-only geometry of an element.
pub trait ElementGeometry {
    /// Current bounding rectangle in page coordinates, including any
    /// applied translation.
    fn bounding_rect(&self) -> Rect;

    /// The element's static offset position (layout position before any
    /// translation is applied).
    fn offset_position(&self) -> Point;

    /// Client-box size, used for containment clamping.
    fn client_size(&self) -> Size;
}

/// Mutable visual surface of an element.
pub trait ElementVisual {
    /// Render the element at the given absolute offset position.
    fn translate(&self, x: f32, y: f32);

    /// Mark or unmark the element as being dragged (e.g. a CSS class).
    fn set_dragging(&self, dragging: bool);

    /// Whether the dragging mark is currently set.
    fn is_dragging(&self) -> bool;
}

/// Everything the controller needs from an element.
pub trait DragElement: ElementGeometry + ElementVisual {}

impl<T: ElementGeometry + ElementVisual> DragElement for T {}

/// Shared handle to an element collaborator.
///
/// `Rc` because the model is single-threaded and cooperative; the host
/// event loop, the controller, and observers may all hold the element.
pub type ElementHandle = Rc<dyn DragElement>;
