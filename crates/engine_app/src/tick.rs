//! Host tick loop.
//!
//! One tick is one rendered frame:
//!
//! 1. Clear the surface to the background color.
//! 2. Run the update-and-render pass on the entity.
//!
//! Presenting the frame, polling window events and pacing are driven from
//! outside, so a [`TickLoop`] can be stepped against any [`Renderer`].

use std::time::Duration;

use engine_component::{Color, GameObject};
use engine_system::{PassConfig, Renderer, keys, update_and_render};
use tracing::{debug, error, info};

use crate::error::AppError;

/// Configuration for the host tick loop.
#[derive(Debug, Clone)]
pub struct TickConfig {
    /// Fixed delay after each presented frame.
    pub frame_delay: Duration,
    /// Maximum number of ticks to run (0 = unlimited).
    pub max_ticks: u64,
    /// Color the surface is cleared to at the start of each tick.
    pub background: Color,
    /// Configuration handed to the pass.
    pub pass: PassConfig,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(16),
            max_ticks: 0,
            background: Color::BACKGROUND,
            pass: PassConfig::default(),
        }
    }
}

/// The host's tick loop state: the entity and a frame counter.
#[derive(Debug)]
pub struct TickLoop {
    /// Number of ticks started so far.
    tick_id: u64,
    config: TickConfig,
    entity: GameObject,
}

impl TickLoop {
    /// Create a tick loop that drives `entity`.
    #[must_use]
    pub fn new(config: TickConfig, entity: GameObject) -> Self {
        Self {
            tick_id: 0,
            config,
            entity,
        }
    }

    /// Returns the current tick counter.
    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    /// Returns a reference to the entity.
    #[must_use]
    pub fn entity(&self) -> &GameObject {
        &self.entity
    }

    /// Returns `true` once `max_ticks` ticks have run. Never true when
    /// `max_ticks` is 0.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.config.max_ticks > 0 && self.tick_id >= self.config.max_ticks
    }

    /// Run one tick against `renderer`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Frame`] if the pass fails. The background has
    /// already been cleared at that point.
    pub fn tick<R>(&mut self, renderer: &mut R) -> Result<(), AppError>
    where
        R: Renderer + ?Sized,
    {
        self.tick_id += 1;

        renderer.set_draw_color(self.config.background);
        renderer.clear();

        if let Err(source) = update_and_render(renderer, &mut self.entity, &self.config.pass) {
            error!(tick_id = self.tick_id, %source, "entity update failed");
            return Err(AppError::Frame {
                tick_id: self.tick_id,
                source,
            });
        }

        debug!(
            tick_id = self.tick_id,
            x = ?self.entity.get::<i32>(keys::X).ok(),
            "tick complete"
        );
        Ok(())
    }

    /// Block for the configured frame delay.
    pub fn pace(&self) {
        if !self.config.frame_delay.is_zero() {
            std::thread::sleep(self.config.frame_delay);
        }
    }

    /// Log the configuration the loop is about to run with.
    pub fn log_start(&self) {
        info!(
            frame_delay_ms = self.config.frame_delay.as_millis() as u64,
            max_ticks = self.config.max_ticks,
            wrap_width = self.config.pass.wrap_width.get(),
            "starting tick loop"
        );
        for (key, value) in self.entity.iter() {
            debug!(key, kind = %value.kind(), ?value, "entity component");
        }
    }
}

#[cfg(test)]
mod tests {
    use engine_component::ComponentError;
    use engine_math::Rect;
    use engine_system::{DrawCommand, RecordingRenderer};

    use super::*;
    use crate::scene;

    #[test]
    fn test_tick_advances_counter() {
        let mut tick_loop = TickLoop::new(TickConfig::default(), scene::bouncing_rectangle());
        let mut renderer = RecordingRenderer::new();
        assert_eq!(tick_loop.tick_id(), 0);
        tick_loop.tick(&mut renderer).unwrap();
        assert_eq!(tick_loop.tick_id(), 1);
        tick_loop.tick(&mut renderer).unwrap();
        assert_eq!(tick_loop.tick_id(), 2);
    }

    #[test]
    fn test_tick_clears_then_draws() {
        let mut tick_loop = TickLoop::new(TickConfig::default(), scene::bouncing_rectangle());
        let mut renderer = RecordingRenderer::new();
        tick_loop.tick(&mut renderer).unwrap();

        assert_eq!(
            renderer.commands(),
            &[
                DrawCommand::SetDrawColor(Color::BACKGROUND),
                DrawCommand::Clear(Color::BACKGROUND),
                DrawCommand::SetDrawColor(Color::RED),
                DrawCommand::FillRect {
                    rect: Rect::from_ints(54, 200, 100, 80),
                    color: Color::RED,
                },
            ]
        );
    }

    #[test]
    fn test_limited_ticks_finish() {
        let config = TickConfig {
            frame_delay: Duration::ZERO,
            max_ticks: 5,
            ..TickConfig::default()
        };
        let mut tick_loop = TickLoop::new(config, scene::bouncing_rectangle());
        let mut renderer = RecordingRenderer::new();

        while !tick_loop.finished() {
            tick_loop.tick(&mut renderer).unwrap();
            tick_loop.pace();
        }

        assert_eq!(tick_loop.tick_id(), 5);
        assert_eq!(tick_loop.entity().get::<i32>(keys::X), Ok(70));
        assert_eq!(renderer.filled_rects().len(), 5);
    }

    #[test]
    fn test_narrow_wrap_width_from_config() {
        let config = TickConfig {
            pass: PassConfig::default().with_wrap_width(std::num::NonZeroU16::new(100).unwrap()),
            ..TickConfig::default()
        };
        let mut tick_loop = TickLoop::new(config, scene::bouncing_rectangle());
        let mut renderer = RecordingRenderer::new();
        tick_loop.log_start();
        for _ in 0..13 {
            tick_loop.tick(&mut renderer).unwrap();
        }
        // 50 + 13 * 4 = 102, wrapped at 100.
        assert_eq!(tick_loop.entity().get::<i32>(keys::X), Ok(2));
    }

    #[test]
    fn test_unlimited_never_finishes() {
        let mut tick_loop = TickLoop::new(TickConfig::default(), scene::bouncing_rectangle());
        let mut renderer = RecordingRenderer::new();
        for _ in 0..200 {
            tick_loop.tick(&mut renderer).unwrap();
        }
        assert!(!tick_loop.finished());
        // 50 + 200 * 4 = 850, wrapped at 640.
        assert_eq!(tick_loop.entity().get::<i32>(keys::X), Ok(210));
    }

    #[test]
    fn test_broken_entity_reports_tick() {
        let mut entity = scene::bouncing_rectangle();
        entity.set(keys::W, "wide");
        let mut tick_loop = TickLoop::new(TickConfig::default(), entity);
        let mut renderer = RecordingRenderer::new();

        let err = tick_loop.tick(&mut renderer).unwrap_err();
        match err {
            AppError::Frame { tick_id, source } => {
                assert_eq!(tick_id, 1);
                assert!(matches!(source, ComponentError::TypeMismatch { ref key, .. } if key == "w"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(renderer.filled_rects().is_empty());
    }
}
