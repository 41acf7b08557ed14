//! # engine_math
//!
//! Math types for the 2D engine. Re-exports [`glam`] vectors and defines the
//! screen-space shapes the renderer draws.

pub mod rect;

// Re-export glam types for convenience.
pub use glam::{IVec2, Vec2};

pub use rect::Rect;
