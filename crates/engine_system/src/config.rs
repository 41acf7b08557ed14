//! Pass configuration.

use std::num::NonZeroU16;

/// Width of the horizontal wrap-around band, in pixels.
pub const DEFAULT_WRAP_WIDTH: NonZeroU16 = NonZeroU16::new(640).unwrap();

/// Velocity used when a moveable entity has no `velocity` component.
pub const DEFAULT_VELOCITY: i32 = 1;

/// Tunables for [`update_and_render`](crate::update_and_render).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassConfig {
    /// `x` is kept in `[0, wrap_width)`.
    pub wrap_width: NonZeroU16,
    /// Velocity assumed when the entity does not carry one.
    pub default_velocity: i32,
}

impl PassConfig {
    /// Override the wrap-around width.
    #[must_use]
    pub fn with_wrap_width(mut self, wrap_width: NonZeroU16) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    /// Override the default velocity.
    #[must_use]
    pub fn with_default_velocity(mut self, velocity: i32) -> Self {
        self.default_velocity = velocity;
        self
    }
}

impl Default for PassConfig {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            default_velocity: DEFAULT_VELOCITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PassConfig::default();
        assert_eq!(config.wrap_width.get(), 640);
        assert_eq!(config.default_velocity, 1);
    }

    #[test]
    fn test_builders() {
        let width = NonZeroU16::new(100).unwrap();
        let config = PassConfig::default()
            .with_wrap_width(width)
            .with_default_velocity(-2);
        assert_eq!(config.wrap_width, width);
        assert_eq!(config.default_velocity, -2);
    }
}
