use super::common::{Derived, EntityBase};
use super::mapped::{create_mapped, delete_mapped, fetch_mapped, update_mapped, MappedEntity};
use super::EntityError;
use crate::config::RequestOptions;
use crate::mapper::PropertyMapEntry;
use crate::store::HubStore;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const PAGE_ENTRIES: &[PropertyMapEntry] = &[
    PropertyMapEntry::new("layout", "data.values.layout"),
    PropertyMapEntry::new("sites", "data.values.sites"),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubPage {
    #[serde(flatten)]
    pub base: EntityBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Value>,
    /// Sites the page is linked into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sites: Option<Vec<Value>>,
    #[serde(flatten)]
    pub derived: Derived,
}

impl MappedEntity for HubPage {
    const KIND: &'static str = "page";
    const ITEM_TYPE: &'static str = "Hub Page";

    fn entries() -> &'static [PropertyMapEntry] {
        PAGE_ENTRIES
    }

    fn default_data() -> Value {
        json!({
            "values": {
                "layout": { "sections": [] },
                "sites": []
            }
        })
    }

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn derived_mut(&mut self) -> &mut Derived {
        &mut self.derived
    }
}

pub async fn fetch_page(
    id: &str,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<HubPage, EntityError> {
    fetch_mapped(id, store, options).await
}

pub async fn create_page(
    page: &HubPage,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<HubPage, EntityError> {
    create_mapped(page, store, options).await
}

pub async fn update_page(
    page: &HubPage,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<HubPage, EntityError> {
    update_mapped(page, store, options).await
}

pub async fn delete_page(
    id: &str,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<(), EntityError> {
    delete_mapped::<HubPage>(id, store, options).await
}
