//! Core value types for the drag controller.
//!
//! Everything here is plain `Copy` data: geometry in page coordinates,
//! normalized pointer samples, and the status a handler reports back to
//! the host event loop.

use serde::{Deserialize, Serialize};

/// A point in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of an element's client box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An element's bounding rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Top-left corner of the rectangle.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Which button produced a pointer-down sample.
///
/// Single-point touch contact is reported as `Primary` by the
/// normalizing event source; only `Primary` may start a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Auxiliary,
}

/// A normalized pointer sample in page coordinates.
///
/// Produced by the host's mouse/touch normalizer. `button` is only
/// meaningful for down samples and defaults to `Primary`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub position: Point,
    pub button: PointerButton,
}

impl PointerSample {
    /// A primary-button sample at the given page position.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            button: PointerButton::Primary,
        }
    }

    /// Same sample with a different button.
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// What a pointer handler did with a sample.
///
/// `Handled` on a down sample tells the host to suppress the native
/// default action of the event the sample was normalized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Handled,
    Ignored,
}

impl EventStatus {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }
}
