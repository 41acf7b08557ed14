//! Component names read by the pass.

/// Text: which shape to draw.
pub const SHAPE: &str = "shape";
/// Color: draw color.
pub const COLOR: &str = "color";
/// Bool: whether the movement step applies.
pub const MOVEABLE: &str = "moveable";
/// Int: horizontal pixels per frame. Optional.
pub const VELOCITY: &str = "velocity";
/// Int: left edge.
pub const X: &str = "x";
/// Int: top edge.
pub const Y: &str = "y";
/// Int: width.
pub const W: &str = "w";
/// Int: height.
pub const H: &str = "h";

/// The one `shape` value that currently draws anything.
pub const RECTANGLE: &str = "rectangle";
