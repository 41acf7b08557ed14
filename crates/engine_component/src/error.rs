//! Component lookup errors.

use crate::component::ComponentKind;

/// Errors returned by typed component reads.
///
/// Both variants indicate an entity-authoring mistake at the call site; they
/// are reported rather than replaced with a default value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComponentError {
    /// No component is stored under the key.
    #[error("component '{0}' not found")]
    KeyNotFound(String),

    /// A component is stored under the key, but of a different kind.
    #[error("component '{key}' holds {found}, requested {expected}")]
    TypeMismatch {
        key: String,
        expected: ComponentKind,
        found: ComponentKind,
    },
}
