use super::common::{Derived, EntityBase};
use super::mapped::{create_mapped, delete_mapped, fetch_mapped, update_mapped, MappedEntity};
use super::EntityError;
use crate::config::RequestOptions;
use crate::mapper::PropertyMapEntry;
use crate::store::HubStore;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const INITIATIVE_ENTRIES: &[PropertyMapEntry] = &[
    PropertyMapEntry::new("status", "data.status"),
    PropertyMapEntry::new("projectIds", "data.associations.projectIds"),
    PropertyMapEntry::new("groupId", "item.properties.groupId"),
];

/// A strategic initiative grouping several projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubInitiative {
    #[serde(flatten)]
    pub base: EntityBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_ids: Option<Vec<String>>,
    /// Group the initiative shares its content through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(flatten)]
    pub derived: Derived,
}

impl MappedEntity for HubInitiative {
    const KIND: &'static str = "initiative";
    const ITEM_TYPE: &'static str = "Hub Initiative";

    fn entries() -> &'static [PropertyMapEntry] {
        INITIATIVE_ENTRIES
    }

    fn default_data() -> Value {
        json!({
            "status": "notStarted",
            "associations": { "projectIds": [] }
        })
    }

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn derived_mut(&mut self) -> &mut Derived {
        &mut self.derived
    }
}

pub async fn fetch_initiative(
    id: &str,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<HubInitiative, EntityError> {
    fetch_mapped(id, store, options).await
}

pub async fn create_initiative(
    initiative: &HubInitiative,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<HubInitiative, EntityError> {
    create_mapped(initiative, store, options).await
}

pub async fn update_initiative(
    initiative: &HubInitiative,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<HubInitiative, EntityError> {
    update_mapped(initiative, store, options).await
}

pub async fn delete_initiative(
    id: &str,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<(), EntityError> {
    delete_mapped::<HubInitiative>(id, store, options).await
}
