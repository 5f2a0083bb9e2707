//! Pointer-driven element dragging with axis locks and containment.
//!
//! The crate is the drag interaction *controller* only: the lifecycle
//! state machine, the math turning page-coordinate pointer samples into
//! element offsets, and containment clamping. Everything that touches a
//! concrete UI toolkit - native event listeners, CSS-class toggling,
//! applying a transform - lives behind the narrow collaborator traits in
//! [`element`] and [`source`], so the controller runs the same against a
//! browser DOM adapter or the in-memory fakes the tests use.
//!
//! ## Architecture
//!
//! - [`types`] - page-coordinate geometry and normalized pointer samples
//! - [`element`] - collaborator traits for the dragged element
//! - [`source`] - collaborator trait for native input binding
//! - [`notifier`] - `start`/`drag`/`end` observer fan-out
//! - [`config`] - axis flags, handle, containment target
//! - [`input`] - the state machine and the per-event handlers
//! - [`Draggable`] - the controller handle tying it together

pub mod config;
pub mod element;
pub mod input;
pub mod notifier;
pub mod source;
pub mod types;

mod draggable;

pub use config::DraggableConfig;
pub use draggable::{Draggable, draggable};
pub use element::{DragElement, ElementGeometry, ElementHandle, ElementVisual};
pub use notifier::{DragPhase, ObserverId};
pub use source::PointerSource;
pub use types::{EventStatus, Point, PointerButton, PointerSample, Rect, Size};
