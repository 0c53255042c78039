//! Shared fixtures: a small map-layer domain with a three-level hierarchy.
//!
//! PersistentObject
//! ├── LayerDataSource
//! │   └── ImageWmsLayerDataSource
//! │       └── TileWmsLayerDataSource
//! ├── TileGrid
//! ├── Layer
//! └── Application

#![allow(dead_code)]

use sieve_model::{
    AttributeDescriptor, ContainerKind, DeclaredType, Model, ModelDescriptor, ModelRegistry,
    ScalarKind, Visibility,
};

pub struct PersistentObject;

impl Model for PersistentObject {
    const NAME: &'static str = "PersistentObject";

    fn describe() -> ModelDescriptor {
        ModelDescriptor::new(Self::NAME)
            .attribute(AttributeDescriptor::int("id"))
            .attribute(AttributeDescriptor::opaque("created", "DateTime"))
            .attribute(AttributeDescriptor::opaque("modified", "DateTime"))
    }
}

pub struct LayerDataSource;

impl Model for LayerDataSource {
    const NAME: &'static str = "LayerDataSource";

    fn describe() -> ModelDescriptor {
        ModelDescriptor::new(Self::NAME)
            .extends(PersistentObject::NAME)
            .attribute(AttributeDescriptor::scalar("serialVersionUID", ScalarKind::Int64).into_static())
            .attribute(AttributeDescriptor::text("name"))
            .attribute(AttributeDescriptor::text("type"))
            .attribute(AttributeDescriptor::text("url"))
    }
}

pub struct ImageWmsLayerDataSource;

impl Model for ImageWmsLayerDataSource {
    const NAME: &'static str = "ImageWmsLayerDataSource";

    fn describe() -> ModelDescriptor {
        ModelDescriptor::new(Self::NAME)
            .extends(LayerDataSource::NAME)
            .attribute(AttributeDescriptor::int("width"))
            .attribute(AttributeDescriptor::int("height"))
            .attribute(AttributeDescriptor::text("version"))
            .attribute(AttributeDescriptor::text("layerNames"))
            .attribute(AttributeDescriptor::text("layerStyles"))
    }
}

pub struct TileWmsLayerDataSource;

impl Model for TileWmsLayerDataSource {
    const NAME: &'static str = "TileWmsLayerDataSource";

    fn describe() -> ModelDescriptor {
        ModelDescriptor::new(Self::NAME)
            .extends(ImageWmsLayerDataSource::NAME)
            .attribute(AttributeDescriptor::relation("tileGrid", "TileGrid"))
    }
}

pub fn tile_grid() -> ModelDescriptor {
    ModelDescriptor::new("TileGrid")
        .extends(PersistentObject::NAME)
        .attribute(AttributeDescriptor::text("type"))
        .attribute(AttributeDescriptor::int("tileSize"))
}

pub fn layer() -> ModelDescriptor {
    ModelDescriptor::new("Layer")
        .extends(PersistentObject::NAME)
        .attribute(AttributeDescriptor::text("name"))
        .attribute(AttributeDescriptor::relation("source", LayerDataSource::NAME))
        .attribute(AttributeDescriptor::bool("visible"))
        .attribute(AttributeDescriptor::scalar("opacity", ScalarKind::Float64))
        .attribute(AttributeDescriptor::text("legendUrl").with_visibility(Visibility::Protected))
}

pub fn application() -> ModelDescriptor {
    ModelDescriptor::new("Application")
        .extends(PersistentObject::NAME)
        .attribute(AttributeDescriptor::text("name"))
        .attribute(AttributeDescriptor::container(
            "layers",
            ContainerKind::List,
            DeclaredType::model("Layer"),
        ))
        .attribute(AttributeDescriptor::container(
            "sources",
            ContainerKind::Collection,
            DeclaredType::model(LayerDataSource::NAME),
        ))
        .attribute(AttributeDescriptor::container(
            "tags",
            ContainerKind::Set,
            DeclaredType::scalar(ScalarKind::Text),
        ))
        .attribute(AttributeDescriptor::text("description").with_visibility(Visibility::Public))
        .attribute(
            AttributeDescriptor::container("ownerIds", ContainerKind::List, DeclaredType::scalar(ScalarKind::Int64))
                .with_visibility(Visibility::Public),
        )
}

pub fn registry() -> ModelRegistry {
    ModelRegistry::builder()
        .register_model::<PersistentObject>()
        .register_model::<LayerDataSource>()
        .register_model::<ImageWmsLayerDataSource>()
        .register_model::<TileWmsLayerDataSource>()
        .register(tile_grid())
        .register(layer())
        .register(application())
        .build()
        .unwrap()
}
