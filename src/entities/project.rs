use super::common::{Derived, EntityBase};
use super::mapped::{create_mapped, delete_mapped, fetch_mapped, update_mapped, MappedEntity};
use super::EntityError;
use crate::config::RequestOptions;
use crate::mapper::PropertyMapEntry;
use crate::store::HubStore;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const PROJECT_ENTRIES: &[PropertyMapEntry] = &[
    PropertyMapEntry::new("status", "data.status"),
    PropertyMapEntry::new("featuredContentIds", "data.view.featuredContentIds"),
    PropertyMapEntry::new("contacts", "data.contacts"),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubProject {
    #[serde(flatten)]
    pub base: EntityBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_content_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Value>>,
    #[serde(flatten)]
    pub derived: Derived,
}

impl MappedEntity for HubProject {
    const KIND: &'static str = "project";
    const ITEM_TYPE: &'static str = "Hub Project";

    fn entries() -> &'static [PropertyMapEntry] {
        PROJECT_ENTRIES
    }

    fn default_data() -> Value {
        json!({
            "status": "notStarted",
            "view": { "featuredContentIds": [] },
            "contacts": []
        })
    }

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn derived_mut(&mut self) -> &mut Derived {
        &mut self.derived
    }
}

pub async fn fetch_project(
    id: &str,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<HubProject, EntityError> {
    fetch_mapped(id, store, options).await
}

pub async fn create_project(
    project: &HubProject,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<HubProject, EntityError> {
    create_mapped(project, store, options).await
}

pub async fn update_project(
    project: &HubProject,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<HubProject, EntityError> {
    update_mapped(project, store, options).await
}

pub async fn delete_project(
    id: &str,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<(), EntityError> {
    delete_mapped::<HubProject>(id, store, options).await
}
