//! Full drag gestures against fake collaborators.

mod axis_lock_tests;
mod containment_tests;
