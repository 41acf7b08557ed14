//! The full per-frame pass over one entity.

use engine_component::{Color, ComponentError, ComponentStore};
use tracing::trace;

use crate::config::PassConfig;
use crate::keys;
use crate::movement::apply_movement;
use crate::render::render;
use crate::renderer::Renderer;

/// Run one frame of update and render for `obj`.
///
/// 1. Read `shape` (text) and `color` (color). Both are required.
/// 2. Apply the movement step (see [`apply_movement`]).
/// 3. Apply the render step (see [`render`]).
///
/// # Errors
///
/// Any missing required component or kind mismatch aborts the pass and is
/// returned. Errors in step 1 leave both the entity and the renderer
/// untouched.
pub fn update_and_render<R>(
    renderer: &mut R,
    obj: &mut ComponentStore,
    config: &PassConfig,
) -> Result<(), ComponentError>
where
    R: Renderer + ?Sized,
{
    let shape: String = obj.get(keys::SHAPE)?;
    let color: Color = obj.get(keys::COLOR)?;

    let moved = apply_movement(obj, config)?;
    trace!(%shape, moved, "entity updated");

    render(renderer, obj, &shape, color)
}

#[cfg(test)]
mod tests {
    use engine_component::GameObject;
    use engine_math::Rect;

    use super::*;
    use crate::renderer::RecordingRenderer;

    fn red_rectangle() -> GameObject {
        let mut obj = GameObject::new();
        obj.set(keys::SHAPE, keys::RECTANGLE);
        obj.set(keys::COLOR, Color::RED);
        obj.set(keys::X, 50);
        obj.set(keys::Y, 200);
        obj.set(keys::W, 100);
        obj.set(keys::H, 80);
        obj.set(keys::MOVEABLE, true);
        obj.set(keys::VELOCITY, 4);
        obj
    }

    #[test]
    fn test_five_frames_end_to_end() {
        let mut obj = red_rectangle();
        let mut renderer = RecordingRenderer::new();
        let config = PassConfig::default();

        for _ in 0..5 {
            update_and_render(&mut renderer, &mut obj, &config).unwrap();
        }

        assert_eq!(obj.get::<i32>(keys::X), Ok(70));
        let expected: Vec<_> = [54, 58, 62, 66, 70]
            .into_iter()
            .map(|x| (Rect::from_ints(x, 200, 100, 80), Color::RED))
            .collect();
        assert_eq!(renderer.filled_rects(), expected);
    }

    #[test]
    fn test_draws_position_after_movement() {
        let mut obj = red_rectangle();
        obj.set(keys::X, 638);
        let mut renderer = RecordingRenderer::new();
        update_and_render(&mut renderer, &mut obj, &PassConfig::default()).unwrap();
        assert_eq!(
            renderer.filled_rects(),
            vec![(Rect::from_ints(2, 200, 100, 80), Color::RED)]
        );
    }

    #[test]
    fn test_zero_velocity_keeps_x_and_draws_there() {
        let mut obj = red_rectangle();
        obj.set(keys::VELOCITY, 0);
        let mut renderer = RecordingRenderer::new();
        let config = PassConfig::default();

        for _ in 0..3 {
            update_and_render(&mut renderer, &mut obj, &config).unwrap();
        }

        assert_eq!(obj.get::<i32>(keys::X), Ok(50));
        assert_eq!(
            renderer.filled_rects(),
            vec![(Rect::from_ints(50, 200, 100, 80), Color::RED); 3]
        );
    }

    #[test]
    fn test_not_moveable_still_renders() {
        let mut obj = red_rectangle();
        obj.set(keys::MOVEABLE, false);
        let mut renderer = RecordingRenderer::new();
        update_and_render(&mut renderer, &mut obj, &PassConfig::default()).unwrap();
        assert_eq!(obj.get::<i32>(keys::X), Ok(50));
        assert_eq!(renderer.filled_rects().len(), 1);
    }

    #[test]
    fn test_missing_color_aborts_before_movement() {
        let mut obj = GameObject::new();
        obj.set(keys::SHAPE, keys::RECTANGLE);
        obj.set(keys::MOVEABLE, true);
        obj.set(keys::X, 50);
        let mut renderer = RecordingRenderer::new();

        assert_eq!(
            update_and_render(&mut renderer, &mut obj, &PassConfig::default()),
            Err(ComponentError::KeyNotFound("color".to_string()))
        );
        assert_eq!(obj.get::<i32>(keys::X), Ok(50));
        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn test_missing_shape_is_an_error() {
        let mut obj = red_rectangle();
        obj.set(keys::SHAPE, 1);
        let mut renderer = RecordingRenderer::new();
        assert!(matches!(
            update_and_render(&mut renderer, &mut obj, &PassConfig::default()),
            Err(ComponentError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_other_shape_moves_but_draws_nothing() {
        let mut obj = red_rectangle();
        obj.set(keys::SHAPE, "triangle");
        let mut renderer = RecordingRenderer::new();
        update_and_render(&mut renderer, &mut obj, &PassConfig::default()).unwrap();
        assert_eq!(obj.get::<i32>(keys::X), Ok(54));
        assert!(renderer.filled_rects().is_empty());
        assert_eq!(renderer.draw_color(), Color::RED);
    }
}
