//! Error types for model registration.

use thiserror::Error;

/// Result type for model registry operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// A set of model declarations that cannot form a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Two descriptors share a name.
    #[error("model registered twice: {0}")]
    DuplicateModel(String),

    /// A model declares the same attribute name twice.
    #[error("model {model} declares attribute {attribute} more than once")]
    DuplicateAttribute { model: String, attribute: String },

    /// A model extends a model that was never registered.
    #[error("model {model} extends unknown model {parent}")]
    UnknownParent { model: String, parent: String },

    /// Following parents from this model leads back to it.
    #[error("inheritance cycle through model {0}")]
    InheritanceCycle(String),

    /// An attribute's type names a model that was never registered.
    #[error("attribute {model}.{attribute} references unknown model {target}")]
    UnknownModelReference {
        model: String,
        attribute: String,
        target: String,
    },
}
