//! Shared lifecycle for model-backed entities.

use super::common::{Derived, EntityBase, COMMON_ENTRIES};
use super::EntityError;
use crate::config::RequestOptions;
use crate::item::{Item, Model};
use crate::mapper::{PropertyMapEntry, PropertyMapper};
use crate::store::HubStore;
use crate::taxonomy::TypeCategoryCache;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// An entity stored as an item of one type plus a data payload.
pub trait MappedEntity: Serialize + DeserializeOwned + Send + Sync {
    /// Name used in logs and errors, e.g. `"project"`.
    const KIND: &'static str;

    /// Item type of the backing item, e.g. `"Hub Project"`.
    const ITEM_TYPE: &'static str;

    /// Map entries specific to this entity, applied after [`COMMON_ENTRIES`].
    fn entries() -> &'static [PropertyMapEntry];

    /// Data payload a newly created entity starts from.
    fn default_data() -> Value;

    fn base(&self) -> &EntityBase;

    fn derived_mut(&mut self) -> &mut Derived;

    #[must_use]
    fn mapper() -> PropertyMapper {
        PropertyMapper::from_tables(&[COMMON_ENTRIES, Self::entries()])
    }

    /// The model a create projects onto.
    #[must_use]
    fn default_model() -> Model {
        let mut item = Item::new("", Self::ITEM_TYPE);
        item.type_keywords = vec![Self::ITEM_TYPE.to_string()];
        Model::new(item, Self::default_data())
    }
}

fn ensure_type<E: MappedEntity>(item: &Item) -> Result<(), EntityError> {
    if item.item_type.eq_ignore_ascii_case(E::ITEM_TYPE) {
        return Ok(());
    }
    Err(EntityError::WrongType {
        id: item.id.clone(),
        expected: E::KIND,
        actual: item.item_type.clone(),
    })
}

/// Project a model into its entity and compute the derived fields.
pub fn compose_mapped<E: MappedEntity>(
    model: &Model,
    options: &RequestOptions,
    cache: &TypeCategoryCache,
) -> Result<E, EntityError> {
    let mut entity: E = E::mapper().model_to_entity(model)?;
    *entity.derived_mut() = Derived::for_item(&model.item, options, cache);
    Ok(entity)
}

/// Fetch the item and data backing an entity of type `E`.
///
/// A missing data payload is replaced by `E`'s default data.
pub async fn fetch_model<E: MappedEntity>(
    id: &str,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<Model, EntityError> {
    let item = store.fetch_item(id, options).await?;
    ensure_type::<E>(&item)?;
    let data = match store.fetch_item_data(id, options).await {
        Ok(data) => data,
        Err(e) if e.is_not_found() => E::default_data(),
        Err(e) => return Err(e.into()),
    };
    Ok(Model::new(item, data))
}

pub async fn fetch_mapped<E: MappedEntity>(
    id: &str,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<E, EntityError> {
    options.validate()?;
    let model = fetch_model::<E>(id, store, options).await?;
    compose_mapped(&model, options, TypeCategoryCache::global())
}

/// Project `entity` onto the default model, persist it and return the
/// stored result.
pub async fn create_mapped<E: MappedEntity>(
    entity: &E,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<E, EntityError> {
    options.validate()?;
    let model = E::mapper().to_model(entity, &E::default_model())?;
    let id = store.create_item(&model, options).await?;
    info!(kind = E::KIND, id = %id, "Created entity");
    fetch_mapped(&id, store, options).await
}

/// Project `entity` onto its current model and persist the result.
///
/// Fields the entity leaves unset keep their stored values.
pub async fn update_mapped<E: MappedEntity>(
    entity: &E,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<E, EntityError> {
    options.validate()?;
    let id = entity.base().id.as_str();
    if id.is_empty() {
        return Err(EntityError::MissingId);
    }
    let current = fetch_model::<E>(id, store, options).await?;
    let model = E::mapper().to_model(entity, &current)?;
    store.update_item(&model, options).await?;
    info!(kind = E::KIND, id, "Updated entity");
    fetch_mapped(id, store, options).await
}

pub async fn delete_mapped<E: MappedEntity>(
    id: &str,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<(), EntityError> {
    options.validate()?;
    let item = store.fetch_item(id, options).await?;
    ensure_type::<E>(&item)?;
    store.remove_item(id, options).await?;
    info!(kind = E::KIND, id, "Deleted entity");
    Ok(())
}
