//! Entity model metadata for sieve.
//!
//! Describes persisted model types without ever touching instances:
//! - [`AttributeDescriptor`]: one declared member (name, type, visibility, storage)
//! - [`ModelDescriptor`] / [`Model`]: a model's own attributes and its parent
//! - [`ModelRegistry`]: validated models with flattened ancestor chains
//!
//! The registry also answers the metadata predicates used to authorize
//! dynamic attribute access ([`ModelRegistry::attribute_exists`],
//! [`ModelRegistry::container_attribute_matches`]). Both fail closed.

mod descriptor;
mod error;
mod metadata;
mod model;
mod registry;

pub use descriptor::{AttributeDescriptor, ContainerKind, DeclaredType, StorageClass, Visibility};
pub use error::{ModelError, ModelResult};
pub use model::{Model, ModelDescriptor};
pub use registry::{ModelRegistry, ModelRegistryBuilder, ModelType, ResolvedAttribute};
pub use sieve_types::ScalarKind;
