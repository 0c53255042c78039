use serde::{Deserialize, Serialize};

use crate::AttributeDescriptor;

/// Declares a model type's own attributes and the model it extends.
///
/// Only the attributes declared directly on this model belong here;
/// inherited ones are resolved by [`crate::ModelRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeDescriptor>,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            attributes: Vec::new(),
        }
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn attribute(mut self, attribute: AttributeDescriptor) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// Implemented by Rust types that describe their own persisted shape.
///
/// ```ignore
/// struct Person;
///
/// impl Model for Person {
///     const NAME: &'static str = "Person";
///
///     fn describe() -> ModelDescriptor {
///         ModelDescriptor::new(Self::NAME)
///             .attribute(AttributeDescriptor::int("age"))
///             .attribute(AttributeDescriptor::text("name"))
///     }
/// }
/// ```
pub trait Model {
    /// The registry name; must equal `describe().name`.
    const NAME: &'static str;

    fn describe() -> ModelDescriptor;
}
