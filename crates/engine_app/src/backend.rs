//! macroquad-backed window and [`Renderer`].

use engine_component::Color;
use engine_math::Rect;
use engine_system::Renderer;
use macroquad::prelude::{Conf, clear_background, draw_rectangle};

pub const WINDOW_TITLE: &str = "Component-Based Model";
pub const WINDOW_WIDTH: i32 = 640;
pub const WINDOW_HEIGHT: i32 = 480;

/// Window configuration: resizable, 640×480.
#[must_use]
pub fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: true,
        ..Default::default()
    }
}

fn to_quad(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// Draws into the current macroquad frame.
///
/// Must only be used from inside the future passed to
/// [`macroquad::Window::from_config`].
#[derive(Debug)]
pub struct QuadRenderer {
    color: Color,
}

impl QuadRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            color: Color::rgb(0, 0, 0),
        }
    }
}

impl Default for QuadRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for QuadRenderer {
    fn set_draw_color(&mut self, color: Color) {
        self.color = color;
    }

    fn clear(&mut self) {
        clear_background(to_quad(self.color));
    }

    fn fill_rect(&mut self, rect: Rect) {
        draw_rectangle(rect.x(), rect.y(), rect.w(), rect.h(), to_quad(self.color));
    }
}
