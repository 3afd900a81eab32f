//! Box types produced by layout.
//!
//! [`Rect`] lives in the authoring reference frame and is what children are
//! positioned against. [`ResolvedBox`] is the same box after the global
//! reference-to-output scale, ready for the renderer.

use serde::Serialize;

/// A rectangle in reference (authoring) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// An absolute box in output pixel space.
///
/// Pure derived value: never mutated once computed, recomputed whenever the
/// element, an ancestor, or the frame changes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ResolvedBox {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the box, never negative.
    pub width: f32,
    /// Height of the box, never negative.
    pub height: f32,
}
