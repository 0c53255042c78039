#![allow(dead_code)]

use sieve_filter::RawFilter;
use sieve_model::{
    AttributeDescriptor, ContainerKind, DeclaredType, Model, ModelDescriptor, ModelRegistry,
    ModelType, ScalarKind, Visibility,
};

/// Root of the person hierarchy; contributes inherited columns.
pub struct Entity;

impl Model for Entity {
    const NAME: &'static str = "Entity";

    fn describe() -> ModelDescriptor {
        ModelDescriptor::new(Self::NAME)
            .attribute(AttributeDescriptor::scalar("id", ScalarKind::Int64))
            .attribute(AttributeDescriptor::opaque("created", "DateTime"))
            .attribute(AttributeDescriptor::bool("active"))
    }
}

pub struct Person;

impl Model for Person {
    const NAME: &'static str = "Person";

    fn describe() -> ModelDescriptor {
        ModelDescriptor::new(Self::NAME)
            .extends(Entity::NAME)
            .attribute(AttributeDescriptor::int("age"))
            .attribute(AttributeDescriptor::text("name"))
            .attribute(AttributeDescriptor::int("internalCounter").into_static())
            .attribute(AttributeDescriptor::int("legacyCounter").with_visibility(Visibility::Protected))
            .attribute(AttributeDescriptor::text("nickname").with_visibility(Visibility::Public))
            .attribute(AttributeDescriptor::relation("employer", "Company"))
            .attribute(AttributeDescriptor::container(
                "aliases",
                ContainerKind::List,
                DeclaredType::scalar(ScalarKind::Text),
            ))
    }
}

pub struct Company;

impl Model for Company {
    const NAME: &'static str = "Company";

    fn describe() -> ModelDescriptor {
        ModelDescriptor::new(Self::NAME)
            .extends(Entity::NAME)
            .attribute(AttributeDescriptor::text("name"))
    }
}

/// One filterable attribute per scalar kind.
pub struct Measurement;

impl Model for Measurement {
    const NAME: &'static str = "Measurement";

    fn describe() -> ModelDescriptor {
        ModelDescriptor::new(Self::NAME)
            .attribute(AttributeDescriptor::bool("valid"))
            .attribute(AttributeDescriptor::scalar("grade", ScalarKind::Char))
            .attribute(AttributeDescriptor::scalar("channel", ScalarKind::Int8))
            .attribute(AttributeDescriptor::scalar("station", ScalarKind::Int16))
            .attribute(AttributeDescriptor::int("count"))
            .attribute(AttributeDescriptor::scalar("sequence", ScalarKind::Int64))
            .attribute(AttributeDescriptor::scalar("ratio", ScalarKind::Float32))
            .attribute(AttributeDescriptor::scalar("value", ScalarKind::Float64))
            .attribute(AttributeDescriptor::text("label"))
    }
}

/// A subtype that redeclares an inherited name with a different type.
pub struct Legacy;

impl Model for Legacy {
    const NAME: &'static str = "Legacy";

    fn describe() -> ModelDescriptor {
        ModelDescriptor::new(Self::NAME)
            .extends(Entity::NAME)
            .attribute(AttributeDescriptor::text("id"))
            .attribute(AttributeDescriptor::int("active").with_visibility(Visibility::Public))
    }
}

/// Two attributes whose names differ only by case.
pub struct Endpoint;

impl Model for Endpoint {
    const NAME: &'static str = "Endpoint";

    fn describe() -> ModelDescriptor {
        ModelDescriptor::new(Self::NAME)
            .attribute(AttributeDescriptor::text("url"))
            .attribute(AttributeDescriptor::int("URL"))
    }
}

pub fn registry() -> ModelRegistry {
    ModelRegistry::builder()
        .register_model::<Entity>()
        .register_model::<Person>()
        .register_model::<Company>()
        .register_model::<Measurement>()
        .register_model::<Legacy>()
        .register_model::<Endpoint>()
        .build()
        .unwrap()
}

pub fn model<'r, M: Model>(registry: &'r ModelRegistry) -> &'r ModelType {
    registry.model_type::<M>().unwrap()
}

/// Builds raw input from `(key, [values])` pairs, preserving order.
pub fn raw(entries: &[(&str, &[&str])]) -> RawFilter {
    let mut filter = RawFilter::new();
    for (key, values) in entries {
        filter.add_all(*key, values.iter().map(|v| v.to_string()));
    }
    filter
}
