//! Declarative, bidirectional projection between flat entities and models.
//!
//! A [`PropertyMapper`] holds an ordered table of [`PropertyMapEntry`]
//! pairs. Projecting towards the store reads each entry's `entity_path` and
//! writes it at `store_path` on a clone of a base model; projecting towards
//! the entity does the mirror walk. Both directions are pure and total:
//! missing (or `null`) source values are skipped, as are values a transform
//! declines to convert.

pub mod dates;

use crate::item::Model;
use crate::path::{get_path, set_path};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A per-field conversion. Returning `None` skips the field.
pub type Transform = fn(&Value) -> Option<Value>;

/// Declares that the entity field at `entity_path` lives at `store_path`.
#[derive(Debug, Clone, Copy)]
pub struct PropertyMapEntry {
    pub entity_path: &'static str,
    pub store_path: &'static str,
    pub to_store: Option<Transform>,
    pub to_entity: Option<Transform>,
}

impl PropertyMapEntry {
    #[must_use]
    pub const fn new(entity_path: &'static str, store_path: &'static str) -> Self {
        Self {
            entity_path,
            store_path,
            to_store: None,
            to_entity: None,
        }
    }

    /// Attach a transform for each direction.
    #[must_use]
    pub const fn transformed(self, to_store: Transform, to_entity: Transform) -> Self {
        Self {
            to_store: Some(to_store),
            to_entity: Some(to_entity),
            ..self
        }
    }
}

/// Ordered, bidirectional field mapping.
#[derive(Debug, Clone, Default)]
pub struct PropertyMapper {
    entries: Vec<PropertyMapEntry>,
}

impl PropertyMapper {
    #[must_use]
    pub fn new(entries: Vec<PropertyMapEntry>) -> Self {
        Self { entries }
    }

    /// Build a mapper from several entry tables, concatenated in order.
    #[must_use]
    pub fn from_tables(tables: &[&[PropertyMapEntry]]) -> Self {
        Self::new(tables.iter().flat_map(|table| table.iter().copied()).collect())
    }

    #[must_use]
    pub fn entries(&self) -> &[PropertyMapEntry] {
        &self.entries
    }

    /// Project `entity` onto a clone of `base_model`.
    ///
    /// Fields absent from `entity` keep whatever `base_model` holds, so
    /// `to_store(&json!({}), base) == *base`.
    #[must_use]
    pub fn to_store(&self, entity: &Value, base_model: &Value) -> Value {
        let mut model = base_model.clone();
        for entry in &self.entries {
            if let Some(value) = project(entity, entry.entity_path, entry.to_store) {
                set_path(&mut model, entry.store_path, value);
            }
        }
        model
    }

    /// Project `model` onto a clone of `base_entity`.
    #[must_use]
    pub fn to_entity(&self, model: &Value, base_entity: &Value) -> Value {
        let mut entity = base_entity.clone();
        for entry in &self.entries {
            if let Some(value) = project(model, entry.store_path, entry.to_entity) {
                set_path(&mut entity, entry.entity_path, value);
            }
        }
        entity
    }

    /// Typed form of [`PropertyMapper::to_store`].
    pub fn to_model<E: Serialize>(&self, entity: &E, base_model: &Model) -> Result<Model, serde_json::Error> {
        let projected = self.to_store(&serde_json::to_value(entity)?, &base_model.to_value()?);
        Model::from_value(projected)
    }

    /// Typed form of [`PropertyMapper::to_entity`], starting from an empty entity.
    pub fn model_to_entity<E: DeserializeOwned>(&self, model: &Model) -> Result<E, serde_json::Error> {
        let projected = self.to_entity(&model.to_value()?, &Value::Object(serde_json::Map::new()));
        serde_json::from_value(projected)
    }
}

fn project(source: &Value, path: &str, transform: Option<Transform>) -> Option<Value> {
    let value = get_path(source, path)?;
    if value.is_null() {
        return None;
    }
    match transform {
        Some(transform) => transform(&value),
        None => Some(value.into_owned()),
    }
}

#[cfg(test)]
#[path = "mapper_tests.rs"]
mod mapper_tests;
