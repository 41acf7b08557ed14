//! # engine_system
//!
//! The per-frame update-and-render pass.
//!
//! Once per frame the host calls [`update_and_render`] with the entity and a
//! [`Renderer`]. The pass reads the entity's components, advances its
//! horizontal position if it is moveable, and issues the draw commands for its
//! shape. Window management, event polling and presenting the frame are left
//! to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use engine_component::{Color, GameObject};
//! use engine_system::{PassConfig, RecordingRenderer, keys, update_and_render};
//!
//! let mut obj = GameObject::new();
//! obj.set(keys::SHAPE, keys::RECTANGLE);
//! obj.set(keys::COLOR, Color::RED);
//! obj.set(keys::MOVEABLE, true);
//! obj.set(keys::X, 10);
//! obj.set(keys::Y, 20);
//! obj.set(keys::W, 30);
//! obj.set(keys::H, 40);
//!
//! let mut renderer = RecordingRenderer::new();
//! update_and_render(&mut renderer, &mut obj, &PassConfig::default()).unwrap();
//!
//! assert_eq!(obj.get::<i32>(keys::X), Ok(11));
//! assert_eq!(renderer.filled_rects().len(), 1);
//! ```

pub mod config;
pub mod keys;
pub mod movement;
pub mod pass;
pub mod render;
pub mod renderer;

pub use config::PassConfig;
pub use movement::{apply_movement, wrap_position};
pub use pass::update_and_render;
pub use render::render;
pub use renderer::{DrawCommand, RecordingRenderer, Renderer};
