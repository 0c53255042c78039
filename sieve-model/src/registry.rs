//! Model registry. Validates model declarations once and flattens each
//! model's ancestor chain into an immutable attribute list.
//!
//! A registry is built at startup and then only read. It holds no interior
//! mutability, so a single instance (typically in a `static OnceLock`) can be
//! shared across any number of concurrent requests.

use std::collections::{HashMap, HashSet};
use tracing::info;

use crate::{AttributeDescriptor, Model, ModelDescriptor, ModelError, ModelResult};

/// An attribute as seen from a concrete model, tagged with where it was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttribute {
    declared_in: String,
    descriptor: AttributeDescriptor,
    shadowed: bool,
}

impl ResolvedAttribute {
    pub fn declared_in(&self) -> &str {
        &self.declared_in
    }

    pub fn descriptor(&self) -> &AttributeDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// True when a nearer model in the chain declares the same name.
    pub fn is_shadowed(&self) -> bool {
        self.shadowed
    }
}

/// A registered model with its ancestry and attributes precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelType {
    name: String,
    ancestors: Vec<String>,
    attributes: Vec<ResolvedAttribute>,
}

impl ModelType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.ancestors.get(1).map(String::as_str)
    }

    /// The inheritance chain, starting with this model and ending at its root.
    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }

    /// Every declared attribute: this model's own first, then each ancestor's
    /// in chain order, each in declaration order.
    pub fn attributes(&self) -> &[ResolvedAttribute] {
        &self.attributes
    }

    /// True if this model is `model` or inherits from it.
    pub fn descends_from(&self, model: &str) -> bool {
        self.ancestors.iter().any(|a| a == model)
    }

    /// Finds the nearest declaration named exactly `name`.
    ///
    /// Without `force_access` only public declarations are considered, so a
    /// non-public declaration may be passed over in favour of a public one
    /// further up the chain.
    pub fn find_attribute(&self, name: &str, force_access: bool) -> Option<&AttributeDescriptor> {
        self.attributes
            .iter()
            .map(|resolved| &resolved.descriptor)
            .find(|attr| attr.name == name && (force_access || attr.visibility.is_public()))
    }
}

/// Collects model descriptors and validates them into a [`ModelRegistry`].
#[derive(Debug, Default)]
pub struct ModelRegistryBuilder {
    descriptors: Vec<ModelDescriptor>,
}

impl ModelRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, descriptor: ModelDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    pub fn register_model<M: Model>(self) -> Self {
        self.register(M::describe())
    }

    pub fn build(self) -> ModelResult<ModelRegistry> {
        let mut by_name: HashMap<&str, &ModelDescriptor> = HashMap::new();
        for descriptor in &self.descriptors {
            if by_name.insert(&descriptor.name, descriptor).is_some() {
                return Err(ModelError::DuplicateModel(descriptor.name.clone()));
            }
        }

        for descriptor in &self.descriptors {
            check_own_attributes(descriptor, &by_name)?;
        }

        let mut models = HashMap::with_capacity(self.descriptors.len());
        for descriptor in &self.descriptors {
            let ancestors = ancestor_chain(descriptor, &by_name)?;
            let attributes = flatten_attributes(&ancestors, &by_name);
            models.insert(
                descriptor.name.clone(),
                ModelType {
                    name: descriptor.name.clone(),
                    ancestors,
                    attributes,
                },
            );
        }

        info!(models = models.len(), "Model registry built");
        Ok(ModelRegistry { models })
    }
}

fn check_own_attributes(
    descriptor: &ModelDescriptor,
    by_name: &HashMap<&str, &ModelDescriptor>,
) -> ModelResult<()> {
    if let Some(parent) = &descriptor.parent
        && !by_name.contains_key(parent.as_str())
    {
        return Err(ModelError::UnknownParent {
            model: descriptor.name.clone(),
            parent: parent.clone(),
        });
    }

    let mut seen = HashSet::new();
    for attribute in &descriptor.attributes {
        if !seen.insert(attribute.name.as_str()) {
            return Err(ModelError::DuplicateAttribute {
                model: descriptor.name.clone(),
                attribute: attribute.name.clone(),
            });
        }
        for target in attribute.declared_type.referenced_models() {
            if !by_name.contains_key(target) {
                return Err(ModelError::UnknownModelReference {
                    model: descriptor.name.clone(),
                    attribute: attribute.name.clone(),
                    target: target.to_owned(),
                });
            }
        }
    }
    Ok(())
}

/// Walks parents from `descriptor` to its root. Parents are known to exist.
fn ancestor_chain<'a>(
    descriptor: &'a ModelDescriptor,
    by_name: &HashMap<&str, &'a ModelDescriptor>,
) -> ModelResult<Vec<String>> {
    let mut chain = vec![descriptor.name.clone()];
    let mut current = descriptor;
    while let Some(parent) = &current.parent {
        if chain.iter().any(|seen| seen == parent) {
            return Err(ModelError::InheritanceCycle(descriptor.name.clone()));
        }
        chain.push(parent.clone());
        match by_name.get(parent.as_str()) {
            Some(next) => current = *next,
            None => break,
        }
    }
    Ok(chain)
}

fn flatten_attributes(
    ancestors: &[String],
    by_name: &HashMap<&str, &ModelDescriptor>,
) -> Vec<ResolvedAttribute> {
    let mut seen = HashSet::new();
    let mut flattened = Vec::new();
    for model in ancestors {
        let Some(descriptor) = by_name.get(model.as_str()) else {
            continue;
        };
        for attribute in &descriptor.attributes {
            let shadowed = !seen.insert(attribute.name.as_str());
            flattened.push(ResolvedAttribute {
                declared_in: model.clone(),
                descriptor: attribute.clone(),
                shadowed,
            });
        }
    }
    flattened
}

/// Immutable, process-wide set of model types.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: HashMap<String, ModelType>,
}

impl ModelRegistry {
    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder::new()
    }

    pub fn get(&self, model: &str) -> Option<&ModelType> {
        self.models.get(model)
    }

    /// Looks up the model type registered for `M`.
    pub fn model_type<M: Model>(&self) -> Option<&ModelType> {
        self.get(M::NAME)
    }

    pub fn contains(&self, model: &str) -> bool {
        self.models.contains_key(model)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Registered model names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.models.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
