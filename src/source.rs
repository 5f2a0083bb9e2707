//! Pointer input binding.
//!
//! The original draggable wired native mouse and touch listeners itself.
//! Here that plumbing is a collaborator: the host registers one
//! `PointerSource` per native input channel, the controller tells each
//! source when to attach and detach, and the host forwards the normalized
//! samples to the controller's `handle_pointer_*` methods.

use crate::element::ElementHandle;

/// A bindable source of normalized pointer samples.
pub trait PointerSource {
    /// Attach native listeners to the given element (the drag handle).
    ///
    /// Called by [`Draggable::build`](crate::Draggable::build); may be
    /// called again after an `unbind`.
    fn bind(&mut self, target: &ElementHandle);

    /// Detach all native listeners. Must tolerate being called when not
    /// bound.
    fn unbind(&mut self);
}
