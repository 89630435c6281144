use super::common::{Derived, EntityBase};
use super::mapped::{create_mapped, delete_mapped, fetch_mapped, update_mapped, MappedEntity};
use super::EntityError;
use crate::config::RequestOptions;
use crate::mapper::PropertyMapEntry;
use crate::store::HubStore;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const SITE_ENTRIES: &[PropertyMapEntry] = &[
    PropertyMapEntry::new("subdomain", "data.values.subdomain"),
    PropertyMapEntry::new("defaultHostname", "data.values.defaultHostname"),
    PropertyMapEntry::new("customHostname", "data.values.customHostname"),
    PropertyMapEntry::new("theme", "data.values.theme"),
    PropertyMapEntry::new("layout", "data.values.layout"),
    PropertyMapEntry::new("pages", "data.values.pages"),
    PropertyMapEntry::new("catalog", "data.catalog"),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubSite {
    #[serde(flatten)]
    pub base: EntityBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<Value>>,
    /// Groups and collections the site's catalog draws from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Value>,
    #[serde(flatten)]
    pub derived: Derived,
}

impl MappedEntity for HubSite {
    const KIND: &'static str = "site";
    const ITEM_TYPE: &'static str = "Hub Site Application";

    fn entries() -> &'static [PropertyMapEntry] {
        SITE_ENTRIES
    }

    fn default_data() -> Value {
        json!({
            "values": {
                "layout": { "sections": [] },
                "theme": {},
                "pages": []
            },
            "catalog": { "groups": [] }
        })
    }

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn derived_mut(&mut self) -> &mut Derived {
        &mut self.derived
    }
}

pub async fn fetch_site(
    id: &str,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<HubSite, EntityError> {
    fetch_mapped(id, store, options).await
}

pub async fn create_site(
    site: &HubSite,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<HubSite, EntityError> {
    create_mapped(site, store, options).await
}

pub async fn update_site(
    site: &HubSite,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<HubSite, EntityError> {
    update_mapped(site, store, options).await
}

pub async fn delete_site(
    id: &str,
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<(), EntityError> {
    delete_mapped::<HubSite>(id, store, options).await
}
