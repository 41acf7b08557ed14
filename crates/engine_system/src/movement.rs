//! Movement step: horizontal motion with wrap-around.

use std::num::NonZeroU16;

use engine_component::{ComponentError, ComponentStore};
use tracing::trace;

use crate::config::PassConfig;
use crate::keys;

/// Advance `x` by `velocity` and wrap into `[0, width)`.
///
/// Uses Euclidean modulo, so a negative velocity moves left and wraps around
/// to the right edge instead of producing a negative coordinate.
#[must_use]
pub fn wrap_position(x: i32, velocity: i32, width: NonZeroU16) -> i32 {
    let moved = i64::from(x) + i64::from(velocity);
    let wrapped = moved.rem_euclid(i64::from(width.get()));
    // In [0, u16::MAX), always representable.
    wrapped as i32
}

/// Apply one frame of movement to `obj`.
///
/// Runs only if `moveable` is present and `true`. Reads `x` and the optional
/// `velocity` (falling back to [`PassConfig::default_velocity`]), then writes
/// the wrapped position back to `x`.
///
/// Returns `true` if `x` was rewritten.
///
/// # Errors
///
/// Returns a [`ComponentError`] if `moveable` is not a bool, if `x` is missing
/// or not an int, or if `velocity` is present but not an int. `x` is left
/// unchanged on error.
pub fn apply_movement(obj: &mut ComponentStore, config: &PassConfig) -> Result<bool, ComponentError> {
    if !obj.has(keys::MOVEABLE) || !obj.get::<bool>(keys::MOVEABLE)? {
        return Ok(false);
    }

    let x: i32 = obj.get(keys::X)?;
    let velocity = if obj.has(keys::VELOCITY) {
        obj.get::<i32>(keys::VELOCITY)?
    } else {
        config.default_velocity
    };

    let next = wrap_position(x, velocity, config.wrap_width);
    obj.set(keys::X, next);

    trace!(x, velocity, next, "moved entity");
    Ok(true)
}
