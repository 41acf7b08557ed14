//! Render step: set the entity's color and draw its shape.

use engine_component::{Color, ComponentError, ComponentStore};
use engine_math::Rect;
use tracing::trace;

use crate::keys;
use crate::renderer::Renderer;

/// Draw `obj` as `shape` in `color`.
///
/// The draw color is always set. Only `"rectangle"` draws anything: it reads
/// the int components `x`, `y`, `w` and `h` and fills that rectangle. Any
/// other shape draws nothing.
///
/// # Errors
///
/// Returns a [`ComponentError`] if the shape is a rectangle and one of its
/// geometry components is missing or not an int. No rectangle is drawn then.
pub fn render<R>(
    renderer: &mut R,
    obj: &ComponentStore,
    shape: &str,
    color: Color,
) -> Result<(), ComponentError>
where
    R: Renderer + ?Sized,
{
    renderer.set_draw_color(color);

    match shape {
        keys::RECTANGLE => {
            let rect = Rect::from_ints(
                obj.get(keys::X)?,
                obj.get(keys::Y)?,
                obj.get(keys::W)?,
                obj.get(keys::H)?,
            );
            renderer.fill_rect(rect);
        }
        other => trace!(shape = other, "shape has no draw routine"),
    }

    Ok(())
}
