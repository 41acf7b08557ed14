//! # engine_component
//!
//! The "C" in ECS: defines what a component value is and how an entity
//! stores them.
//!
//! An entity is nothing more than its [`ComponentStore`]: a map from component
//! name to a [`ComponentValue`]. Reads are typed and fail loudly when the
//! stored kind does not match the requested one.
//!
//! This crate provides:
//!
//! - [`ComponentValue`] — the closed set of value kinds a component may hold.
//! - [`ComponentKind`] — the kind tag used in error reporting.
//! - [`Color`] — an RGBA color with 8-bit channels.
//! - [`FromComponent`] — typed extraction used by [`ComponentStore::get`].
//! - [`ComponentStore`] / [`GameObject`] — the per-entity component map.
//! - [`ComponentError`] — lookup failures.

pub mod component;
pub mod error;
pub mod store;

pub use component::{Color, ComponentKind, ComponentValue, FromComponent};
pub use error::ComponentError;
pub use store::{ComponentStore, GameObject};
