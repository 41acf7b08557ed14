//! The drawing surface the pass issues commands to.
//!
//! [`Renderer`] is the seam between the pass and whatever graphics backend the
//! host uses. [`RecordingRenderer`] keeps a log of every command instead of
//! drawing, which lets the pass be exercised without a window.

use engine_component::Color;
use engine_math::Rect;

/// A 2D drawing surface with a current draw color.
pub trait Renderer {
    /// Set the color used by subsequent [`clear`](Renderer::clear) and
    /// [`fill_rect`](Renderer::fill_rect) calls.
    fn set_draw_color(&mut self, color: Color);

    /// Fill the whole surface with the current draw color.
    fn clear(&mut self);

    /// Fill `rect` with the current draw color.
    fn fill_rect(&mut self, rect: Rect);
}

/// One command received by a [`RecordingRenderer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    SetDrawColor(Color),
    /// Clear, with the draw color that was current at the time.
    Clear(Color),
    /// Filled rectangle, with the draw color that was current at the time.
    FillRect { rect: Rect, color: Color },
}

/// A [`Renderer`] that records commands instead of drawing them.
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    color: Color,
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Create a recorder with an opaque black draw color and no commands.
    #[must_use]
    pub fn new() -> Self {
        Self {
            color: Color::rgb(0, 0, 0),
            commands: Vec::new(),
        }
    }

    /// The current draw color.
    #[must_use]
    pub fn draw_color(&self) -> Color {
        self.color
    }

    /// Every command received so far, in order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The filled rectangles received so far, with their colors.
    #[must_use]
    pub fn filled_rects(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for RecordingRenderer {
    fn set_draw_color(&mut self, color: Color) {
        self.color = color;
        self.commands.push(DrawCommand::SetDrawColor(color));
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear(self.color));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: self.color,
        });
    }
}
