//! Pointer input handling for the drag controller.
//!
//! The controller uses an explicit state machine (`DragState`) rather
//! than scattered boolean flags, so a session existing and the state
//! being `Dragging` are the same fact.
//!
//! ## Modules
//!
//! - `state` - Drag state machine and per-session baseline data
//! - `coords` - Candidate-position math and containment clamping
//! - `pointer_down` - Pointer-down handling (session capture, `start`)
//! - `drag` - Pointer-move handling (move math, clamp, apply, `drag`)
//! - `pointer_up` - Pointer-up handling (finalize, `end`)

pub mod coords;
mod drag;
mod pointer_down;
mod pointer_up;
mod state;

pub use state::{DragSession, DragState};
