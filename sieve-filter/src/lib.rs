//! Typed filter construction for sieve.
//!
//! Given untrusted request parameters and a registered model type, produce a
//! filter that only names real, eligible, type-checked scalar attributes:
//!
//! ```ignore
//! let registry = ModelRegistry::builder().register_model::<Person>().build()?;
//! let person = registry.model_type::<Person>().unwrap();
//!
//! let raw = RawFilter::from([
//!     ("AGE", vec!["30".to_string()]),
//!     ("bogus", vec!["x".to_string()]),
//! ]);
//! let filter = build_typed_filter(&raw, person)?;
//! assert_eq!(filter.get("age"), Some(&[TypedValue::Int32(30)][..]));
//! ```
//!
//! Unknown and ineligible keys are dropped silently. Malformed values for
//! real attributes are reported as [`FilterError::InvalidValue`].

mod builder;
mod config;
mod error;

pub use builder::{FilterBuilder, build_typed_filter, filterable_attributes};
pub use config::{DuplicateKeyPolicy, FilterConfig};
pub use error::{FilterError, FilterResult};
pub use sieve_types::{RawFilter, TypedFilter, TypedValue};
