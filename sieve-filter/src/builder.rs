//! Typed filter construction.
//!
//! Turns untrusted, string-valued request parameters into a filter keyed by
//! canonical attribute names with values coerced to each attribute's
//! declared scalar type. Only eligible attributes (private, instance-level,
//! scalar, not shadowed) can be addressed; every other key is dropped.

use std::collections::{HashMap, HashSet};

use sieve_model::{AttributeDescriptor, ModelType, ResolvedAttribute};
use sieve_types::{RawFilter, TypedFilter};
use tracing::debug;

use crate::{DuplicateKeyPolicy, FilterConfig, FilterError, FilterResult};

/// Attributes of `model` that a filter may address, in flattened order.
pub fn filterable_attributes(model: &ModelType) -> impl Iterator<Item = &AttributeDescriptor> {
    model
        .attributes()
        .iter()
        .filter(|resolved| !resolved.is_shadowed())
        .map(ResolvedAttribute::descriptor)
        .filter(|attribute| attribute.is_filterable())
}

/// Builds a typed filter with the default configuration.
pub fn build_typed_filter(raw: &RawFilter, model: &ModelType) -> FilterResult<TypedFilter> {
    FilterBuilder::default().build(raw, model)
}

/// Validates raw filter input against a model type.
///
/// Stateless apart from its configuration; one builder can serve any
/// number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    config: FilterConfig,
}

impl FilterBuilder {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Reconciles input keys to canonical attribute names and coerces values.
    ///
    /// Output keys follow the model's flattened attribute order; values keep
    /// their input order. Any coercion failure fails the whole call.
    pub fn build(&self, raw: &RawFilter, model: &ModelType) -> FilterResult<TypedFilter> {
        let candidates: Vec<&AttributeDescriptor> = filterable_attributes(model).collect();
        let bindings = self.bind_keys(raw, &candidates)?;
        log_dropped_keys(raw, model, &bindings);

        let mut filter = TypedFilter::new();
        for (attribute, key) in bindings {
            let (Some(values), Some(kind)) = (raw.get(key), attribute.scalar_kind()) else {
                continue;
            };
            self.check_value_count(attribute, values.len())?;

            let typed = values
                .iter()
                .map(|value| {
                    kind.coerce(value)
                        .map_err(|e| FilterError::invalid_value(&attribute.name, e))
                })
                .collect::<FilterResult<Vec<_>>>()?;

            if !typed.is_empty() {
                filter.add_all(attribute.name.clone(), typed);
            }
        }
        Ok(filter)
    }

    /// Pairs each candidate with at most one input key, in candidate order.
    fn bind_keys<'m, 'r>(
        &self,
        raw: &'r RawFilter,
        candidates: &[&'m AttributeDescriptor],
    ) -> FilterResult<Vec<(&'m AttributeDescriptor, &'r str)>> {
        let mut keys_by_fold: HashMap<String, Vec<&'r str>> = HashMap::new();
        for key in raw.keys() {
            keys_by_fold.entry(key.to_lowercase()).or_default().push(key);
        }

        let policy = self.config.duplicate_keys;
        let mut claimed: HashMap<&'r str, &'m str> = HashMap::new();
        let mut bindings = Vec::new();

        for &attribute in candidates {
            let Some(keys) = keys_by_fold.get(&attribute.name.to_lowercase()) else {
                continue;
            };
            let Some(&key) = keys.first() else {
                continue;
            };

            if keys.len() > 1 {
                match policy {
                    DuplicateKeyPolicy::Reject => {
                        return Err(FilterError::DuplicateKey {
                            attribute: attribute.name.clone(),
                            keys: keys.iter().map(|k| k.to_string()).collect(),
                        });
                    }
                    DuplicateKeyPolicy::FirstWins => {
                        debug!(
                            attribute = %attribute.name,
                            bound = ?key,
                            ignored = keys.len() - 1,
                            "Ignoring duplicate filter keys"
                        );
                    }
                }
            }

            if let Some(&previous) = claimed.get(key) {
                match policy {
                    DuplicateKeyPolicy::Reject => {
                        return Err(FilterError::AmbiguousKey {
                            key: key.to_owned(),
                            attributes: vec![previous.to_owned(), attribute.name.clone()],
                        });
                    }
                    DuplicateKeyPolicy::FirstWins => {
                        debug!(
                            attribute = %attribute.name,
                            key = ?key,
                            claimed_by = %previous,
                            "Filter key already bound to another attribute"
                        );
                        continue;
                    }
                }
            }

            claimed.insert(key, attribute.name.as_str());
            bindings.push((attribute, key));
        }

        Ok(bindings)
    }

    fn check_value_count(&self, attribute: &AttributeDescriptor, count: usize) -> FilterResult<()> {
        match self.config.max_values_per_key {
            Some(limit) if count > limit => Err(FilterError::TooManyValues {
                attribute: attribute.name.clone(),
                count,
                limit,
            }),
            _ => Ok(()),
        }
    }
}

/// Logs every input key that did not bind, distinguishing keys that name a
/// real but ineligible attribute from keys that name nothing.
fn log_dropped_keys(raw: &RawFilter, model: &ModelType, bindings: &[(&AttributeDescriptor, &str)]) {
    let bound: HashSet<&str> = bindings.iter().map(|(_, key)| *key).collect();
    for key in raw.keys().filter(|key| !bound.contains(key)) {
        let folded = key.to_lowercase();
        let exists = model
            .attributes()
            .iter()
            .any(|resolved| resolved.name().to_lowercase() == folded);
        if exists {
            debug!(model = %model.name(), key = ?key, "Dropping filter key for ineligible attribute");
        } else {
            debug!(model = %model.name(), key = ?key, "Dropping unknown filter key");
        }
    }
}
