//! Draggable configuration.
//!
//! Replaces the original's free-form instance fields with an explicit
//! struct and documented defaults. Mutated only through the controller's
//! configuration API, read during move computation.

use crate::element::ElementHandle;

/// Configuration read on every move computation.
pub struct DraggableConfig {
    /// Track the pointer on the x axis. Default true; once disabled there
    /// is no way to re-enable short of building a new controller.
    pub x_axis: bool,

    /// Track the pointer on the y axis. Default true, same asymmetry.
    pub y_axis: bool,

    /// Element that receives pointer input. Defaults to the dragged
    /// element itself; resolved at bind time, so changing it has no
    /// effect on already-bound sources.
    pub handle: Option<ElementHandle>,

    /// Element whose client box bounds the dragged element's travel.
    /// `None` disables clamping.
    pub containment: Option<ElementHandle>,
}

impl Default for DraggableConfig {
    fn default() -> Self {
        Self {
            x_axis: true,
            y_axis: true,
            handle: None,
            containment: None,
        }
    }
}

impl std::fmt::Debug for DraggableConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraggableConfig")
            .field("x_axis", &self.x_axis)
            .field("y_axis", &self.y_axis)
            .field("handle", &self.handle.is_some())
            .field("containment", &self.containment.is_some())
            .finish()
    }
}
