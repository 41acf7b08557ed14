//! Entity definitions for the demo scene.

use engine_component::{Color, GameObject};
use engine_system::keys;

/// A red 100×80 rectangle at (50, 200) moving right at 4 px per frame.
#[must_use]
pub fn bouncing_rectangle() -> GameObject {
    let mut obj = GameObject::new();
    obj.set(keys::SHAPE, keys::RECTANGLE);
    obj.set(keys::COLOR, Color::RED);
    obj.set(keys::MOVEABLE, true);
    obj.set(keys::VELOCITY, 4);
    obj.set(keys::X, 50);
    obj.set(keys::Y, 200);
    obj.set(keys::W, 100);
    obj.set(keys::H, 80);
    obj
}
