use serde::{Deserialize, Serialize};
use sieve_types::ScalarKind;

/// Declared access level of an attribute, most restrictive first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Private,
    Package,
    Protected,
    Public,
}

impl Visibility {
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

/// Whether an attribute belongs to each instance or to the model type itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageClass {
    Instance,
    Static,
}

/// The shape of a container attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// Any container; accepts lists and sets.
    Collection,
    List,
    Set,
}

impl ContainerKind {
    /// Whether a container of kind `other` may be stored where `self` is declared.
    pub fn accepts(&self, other: ContainerKind) -> bool {
        match self {
            Self::Collection => true,
            Self::List => other == Self::List,
            Self::Set => other == Self::Set,
        }
    }
}

/// The semantic type of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclaredType {
    /// A directly-parseable scalar (bool, integer, float, char, text).
    Scalar(ScalarKind),
    /// A relation to another registered model, by model name.
    Model(String),
    /// A container of elements of a single declared type.
    Container {
        kind: ContainerKind,
        element: Box<DeclaredType>,
    },
    /// Any other object-valued type (dates, geometries, enums), by type name.
    Opaque(String),
}

impl DeclaredType {
    pub fn scalar(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }

    pub fn model(name: impl Into<String>) -> Self {
        Self::Model(name.into())
    }

    pub fn opaque(name: impl Into<String>) -> Self {
        Self::Opaque(name.into())
    }

    pub fn container(kind: ContainerKind, element: DeclaredType) -> Self {
        Self::Container {
            kind,
            element: Box::new(element),
        }
    }

    pub fn list(element: DeclaredType) -> Self {
        Self::container(ContainerKind::List, element)
    }

    pub fn set(element: DeclaredType) -> Self {
        Self::container(ContainerKind::Set, element)
    }

    pub fn collection(element: DeclaredType) -> Self {
        Self::container(ContainerKind::Collection, element)
    }

    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            Self::Scalar(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Element type of a container; `None` for every other shape.
    pub fn element_type(&self) -> Option<&DeclaredType> {
        match self {
            Self::Container { element, .. } => Some(element.as_ref()),
            _ => None,
        }
    }

    /// Names of every model this type refers to, including container elements.
    pub(crate) fn referenced_models(&self) -> Vec<&str> {
        match self {
            Self::Model(name) => vec![name.as_str()],
            Self::Container { element, .. } => element.referenced_models(),
            Self::Scalar(_) | Self::Opaque(_) => Vec::new(),
        }
    }
}

/// A named, typed member of a model as declared on that model.
///
/// Descriptors are pure declarations. They never carry instance state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    pub name: String,
    pub declared_type: DeclaredType,
    pub visibility: Visibility,
    pub storage: StorageClass,
}

impl AttributeDescriptor {
    pub fn new(
        name: impl Into<String>,
        declared_type: DeclaredType,
        visibility: Visibility,
        storage: StorageClass,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type,
            visibility,
            storage,
        }
    }

    fn private(name: impl Into<String>, declared_type: DeclaredType) -> Self {
        Self::new(name, declared_type, Visibility::Private, StorageClass::Instance)
    }

    /// Shorthand for a private instance scalar, the usual persisted column.
    pub fn scalar(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self::private(name, DeclaredType::Scalar(kind))
    }

    /// Shorthand for a private instance text attribute.
    pub fn text(name: impl Into<String>) -> Self {
        Self::scalar(name, ScalarKind::Text)
    }

    /// Shorthand for a private instance 32-bit integer attribute.
    pub fn int(name: impl Into<String>) -> Self {
        Self::scalar(name, ScalarKind::Int32)
    }

    /// Shorthand for a private instance boolean attribute.
    pub fn bool(name: impl Into<String>) -> Self {
        Self::scalar(name, ScalarKind::Bool)
    }

    /// Shorthand for a private instance relation to another model.
    pub fn relation(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self::private(name, DeclaredType::model(model))
    }

    /// Shorthand for a private instance container attribute.
    pub fn container(name: impl Into<String>, kind: ContainerKind, element: DeclaredType) -> Self {
        Self::private(name, DeclaredType::container(kind, element))
    }

    /// Shorthand for a private instance attribute of some non-scalar object type.
    pub fn opaque(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::private(name, DeclaredType::opaque(type_name))
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Marks the attribute as belonging to the model type rather than its instances.
    pub fn into_static(mut self) -> Self {
        self.storage = StorageClass::Static;
        self
    }

    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        self.declared_type.scalar_kind()
    }

    pub fn element_type(&self) -> Option<&DeclaredType> {
        self.declared_type.element_type()
    }

    pub fn is_static(&self) -> bool {
        self.storage == StorageClass::Static
    }

    /// Private, instance-level and scalar: the only shape filters may address.
    pub fn is_filterable(&self) -> bool {
        self.visibility == Visibility::Private
            && self.storage == StorageClass::Instance
            && self.scalar_kind().is_some()
    }
}
