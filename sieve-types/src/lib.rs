//! Core value types for sieve.
//!
//! This crate defines the building blocks shared by the model
//! metadata and filter layers:
//! - [`ScalarKind`]: the closed set of directly-parseable attribute types
//! - [`TypedValue`]: a value coerced into one of those kinds
//! - [`MultiValueMap`]: an insertion-ordered `key -> [values]` map
//!
//! Raw request parameters arrive as a [`RawFilter`]; once validated against a
//! model they become a [`TypedFilter`].

mod multimap;
mod value;

pub use multimap::MultiValueMap;
pub use value::{ScalarKind, TypedValue};

/// Untrusted, string-valued filter input keyed by whatever the caller sent.
pub type RawFilter = MultiValueMap<String>;

/// Validated filter output keyed by canonical attribute name.
pub type TypedFilter = MultiValueMap<TypedValue>;

/// Result type alias for coercion.
pub type CoercionResult<T> = std::result::Result<T, CoercionError>;

/// A raw string could not be converted into the requested scalar kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot coerce {value:?} to {kind}: {reason}")]
pub struct CoercionError {
    pub kind: ScalarKind,
    pub value: String,
    pub reason: String,
}

impl CoercionError {
    pub(crate) fn new(kind: ScalarKind, value: &str, reason: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.to_owned(),
            reason: reason.into(),
        }
    }
}
