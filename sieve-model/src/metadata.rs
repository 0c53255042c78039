//! Entity metadata accessor.
//!
//! Structural questions about a registered model: does an attribute exist,
//! could a value of some type be stored in it, and is it a container of some
//! element type. Every predicate is fail-closed: unknown models, unknown
//! attributes, hidden attributes and type mismatches all answer `false`.

use tracing::debug;

use crate::{AttributeDescriptor, DeclaredType, Model, ModelRegistry};

impl ModelRegistry {
    /// Whether `model` has an attribute named exactly `attribute`, and if
    /// `expected` is given, whether a value of that type may be stored in it.
    ///
    /// With `force_access == false` only public attributes are visible.
    pub fn attribute_exists(
        &self,
        model: &str,
        attribute: &str,
        expected: Option<&DeclaredType>,
        force_access: bool,
    ) -> bool {
        let Some(found) = self.lookup(model, attribute, force_access) else {
            return false;
        };
        match expected {
            None => true,
            Some(expected) => self.is_assignable_from(&found.declared_type, expected),
        }
    }

    /// Whether `attribute` on `model` is a container whose element type
    /// accepts values of `element`.
    pub fn container_attribute_matches(
        &self,
        model: &str,
        attribute: &str,
        element: &DeclaredType,
        force_access: bool,
    ) -> bool {
        self.lookup(model, attribute, force_access)
            .and_then(AttributeDescriptor::element_type)
            .is_some_and(|declared| self.is_assignable_from(declared, element))
    }

    /// [`ModelRegistry::attribute_exists`] keyed by a Rust model type.
    pub fn attribute_exists_on<M: Model>(
        &self,
        attribute: &str,
        expected: Option<&DeclaredType>,
        force_access: bool,
    ) -> bool {
        self.attribute_exists(M::NAME, attribute, expected, force_access)
    }

    /// [`ModelRegistry::container_attribute_matches`] keyed by a Rust model type.
    pub fn container_attribute_matches_on<M: Model>(
        &self,
        attribute: &str,
        element: &DeclaredType,
        force_access: bool,
    ) -> bool {
        self.container_attribute_matches(M::NAME, attribute, element, force_access)
    }

    /// Whether a value of type `candidate` may be stored where `declared` is declared.
    ///
    /// Scalars and opaque types must match exactly. A model accepts itself and
    /// its descendants. A container accepts a compatible container kind whose
    /// element type is itself assignable.
    pub fn is_assignable_from(&self, declared: &DeclaredType, candidate: &DeclaredType) -> bool {
        match (declared, candidate) {
            (DeclaredType::Scalar(a), DeclaredType::Scalar(b)) => a == b,
            (DeclaredType::Model(a), DeclaredType::Model(b)) => {
                self.get(b).is_some_and(|m| m.descends_from(a))
            }
            (
                DeclaredType::Container { kind, element },
                DeclaredType::Container {
                    kind: candidate_kind,
                    element: candidate_element,
                },
            ) => {
                kind.accepts(*candidate_kind) && self.is_assignable_from(element, candidate_element)
            }
            (DeclaredType::Opaque(a), DeclaredType::Opaque(b)) => a == b,
            _ => false,
        }
    }

    fn lookup(
        &self,
        model: &str,
        attribute: &str,
        force_access: bool,
    ) -> Option<&AttributeDescriptor> {
        let Some(model_type) = self.get(model) else {
            debug!(model = %model, "Metadata lookup on unregistered model");
            return None;
        };
        model_type.find_attribute(attribute, force_access)
    }
}
