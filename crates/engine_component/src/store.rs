//! Per-entity component storage.
//!
//! A [`ComponentStore`] maps component names to [`ComponentValue`]s. Keys are
//! unique; setting an existing key replaces its value and may change its
//! kind. Entries are kept ordered by key.

use std::collections::BTreeMap;

use crate::component::{ComponentValue, FromComponent};
use crate::error::ComponentError;

/// An entity, represented solely by the components it owns.
pub type GameObject = ComponentStore;

/// A string-keyed map of heterogeneous component values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentStore {
    components: BTreeMap<String, ComponentValue>,
}

impl ComponentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the component at `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ComponentValue>) {
        self.components.insert(key.into(), value.into());
    }

    /// Returns `true` if a component is stored under `key`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.components.contains_key(key)
    }

    /// Read the component at `key` as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::KeyNotFound`] if `key` is absent, or
    /// [`ComponentError::TypeMismatch`] if the stored kind is not `T::KIND`.
    pub fn get<T: FromComponent>(&self, key: &str) -> Result<T, ComponentError> {
        let value = self.get_value(key)?;
        T::from_component(value).ok_or_else(|| ComponentError::TypeMismatch {
            key: key.to_owned(),
            expected: T::KIND,
            found: value.kind(),
        })
    }

    /// Borrow the raw value at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::KeyNotFound`] if `key` is absent.
    pub fn get_value(&self, key: &str) -> Result<&ComponentValue, ComponentError> {
        self.components
            .get(key)
            .ok_or_else(|| ComponentError::KeyNotFound(key.to_owned()))
    }

    /// Number of components stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentValue)> {
        self.components.iter().map(|(k, v)| (k.as_str(), v))
    }
}
