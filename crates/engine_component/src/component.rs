//! Component values and typed extraction.
//!
//! A component is a single named attribute of an entity. Its value is one of
//! a closed set of kinds, modelled by [`ComponentValue`]. Reading a value back
//! goes through [`FromComponent`], which refuses to coerce between kinds: an
//! `Int` is never read as a `Float`, and a `Bool` is never read as an `Int`.

use std::fmt;

/// An RGBA color with one unsigned byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// The dark grey the frame is cleared to before entities are drawn.
    pub const BACKGROUND: Self = Self::rgb(30, 30, 30);

    /// Create a color from all four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// The kind of value a component holds.
///
/// Used to report which kind was stored and which was requested when a typed
/// read fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Int,
    Float,
    Bool,
    Color,
    Text,
}

impl ComponentKind {
    /// All kinds, in declaration order.
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Int,
        ComponentKind::Float,
        ComponentKind::Bool,
        ComponentKind::Color,
        ComponentKind::Text,
    ];

    /// Lowercase name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ComponentKind::Int => "int",
            ComponentKind::Float => "float",
            ComponentKind::Bool => "bool",
            ComponentKind::Color => "color",
            ComponentKind::Text => "text",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value of a single component. Exactly one kind is active at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentValue {
    Int(i32),
    Float(f32),
    Bool(bool),
    Color(Color),
    Text(String),
}

impl ComponentValue {
    /// Returns the kind of the active variant.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            ComponentValue::Int(_) => ComponentKind::Int,
            ComponentValue::Float(_) => ComponentKind::Float,
            ComponentValue::Bool(_) => ComponentKind::Bool,
            ComponentValue::Color(_) => ComponentKind::Color,
            ComponentValue::Text(_) => ComponentKind::Text,
        }
    }
}

impl From<i32> for ComponentValue {
    fn from(value: i32) -> Self {
        ComponentValue::Int(value)
    }
}

impl From<f32> for ComponentValue {
    fn from(value: f32) -> Self {
        ComponentValue::Float(value)
    }
}

impl From<bool> for ComponentValue {
    fn from(value: bool) -> Self {
        ComponentValue::Bool(value)
    }
}

impl From<Color> for ComponentValue {
    fn from(value: Color) -> Self {
        ComponentValue::Color(value)
    }
}

impl From<String> for ComponentValue {
    fn from(value: String) -> Self {
        ComponentValue::Text(value)
    }
}

impl From<&str> for ComponentValue {
    fn from(value: &str) -> Self {
        ComponentValue::Text(value.to_owned())
    }
}

/// A Rust type that can be read out of a [`ComponentValue`] of one specific
/// kind.
///
/// # Examples
///
/// ```rust
/// use engine_component::{ComponentKind, ComponentValue, FromComponent};
///
/// let value = ComponentValue::Int(7);
/// assert_eq!(i32::from_component(&value), Some(7));
/// assert_eq!(bool::from_component(&value), None);
/// assert_eq!(<i32 as FromComponent>::KIND, ComponentKind::Int);
/// ```
pub trait FromComponent: Sized {
    /// The kind this type is stored as.
    const KIND: ComponentKind;

    /// Extract `Self` if `value` is of kind [`Self::KIND`], otherwise `None`.
    fn from_component(value: &ComponentValue) -> Option<Self>;
}

impl FromComponent for i32 {
    const KIND: ComponentKind = ComponentKind::Int;

    fn from_component(value: &ComponentValue) -> Option<Self> {
        match value {
            ComponentValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromComponent for f32 {
    const KIND: ComponentKind = ComponentKind::Float;

    fn from_component(value: &ComponentValue) -> Option<Self> {
        match value {
            ComponentValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromComponent for bool {
    const KIND: ComponentKind = ComponentKind::Bool;

    fn from_component(value: &ComponentValue) -> Option<Self> {
        match value {
            ComponentValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromComponent for Color {
    const KIND: ComponentKind = ComponentKind::Color;

    fn from_component(value: &ComponentValue) -> Option<Self> {
        match value {
            ComponentValue::Color(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromComponent for String {
    const KIND: ComponentKind = ComponentKind::Text;

    fn from_component(value: &ComponentValue) -> Option<Self> {
        match value {
            ComponentValue::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}
