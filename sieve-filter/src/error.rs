//! Error types for filter construction.

use sieve_types::{CoercionError, ScalarKind};
use thiserror::Error;

/// Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors a caller can get back from building a filter.
///
/// Unknown and ineligible keys are not errors; they are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A value for a real, eligible attribute could not be coerced to its type.
    #[error("invalid value {value:?} for filter attribute {attribute} ({kind}): {reason}")]
    InvalidValue {
        attribute: String,
        value: String,
        kind: ScalarKind,
        reason: String,
    },

    /// More than one input key folds to the same attribute.
    #[error("filter attribute {attribute} supplied under several keys: {keys:?}")]
    DuplicateKey { attribute: String, keys: Vec<String> },

    /// One input key folds to several attributes that differ only by case.
    #[error("filter key {key:?} is ambiguous between attributes {attributes:?}")]
    AmbiguousKey { key: String, attributes: Vec<String> },

    /// An attribute was given more values than the configured limit.
    #[error("filter attribute {attribute} has {count} values (limit {limit})")]
    TooManyValues {
        attribute: String,
        count: usize,
        limit: usize,
    },

    /// The filter configuration could not be parsed.
    #[error("invalid filter config: {0}")]
    Config(String),
}

impl FilterError {
    pub(crate) fn invalid_value(attribute: &str, err: CoercionError) -> Self {
        Self::InvalidValue {
            attribute: attribute.to_owned(),
            value: err.value,
            kind: err.kind,
            reason: err.reason,
        }
    }
}

impl From<toml::de::Error> for FilterError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
