//! Axis-aligned screen-space rectangle.
//!
//! [`Rect`] is the shape the render step fills. Coordinates are in pixels with
//! the origin at the top-left of the window and `y` growing downwards.

use glam::{IVec2, Vec2};

/// An axis-aligned rectangle given by its top-left corner and its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner, in pixels.
    pub position: Vec2,
    /// Width and height, in pixels.
    pub size: Vec2,
}

impl Rect {
    /// Create a rectangle from a corner and a size.
    #[must_use]
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Create a rectangle from integer pixel coordinates.
    #[must_use]
    pub fn from_ints(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(IVec2::new(x, y).as_vec2(), IVec2::new(w, h).as_vec2())
    }

    #[must_use]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[must_use]
    pub fn y(&self) -> f32 {
        self.position.y
    }

    #[must_use]
    pub fn w(&self) -> f32 {
        self.size.x
    }

    #[must_use]
    pub fn h(&self) -> f32 {
        self.size.y
    }
}
