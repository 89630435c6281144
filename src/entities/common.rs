use crate::config::RequestOptions;
use crate::item::Item;
use crate::mapper::dates::{
    epoch_to_iso, from_date_with_precision, iso_to_epoch, to_date_with_precision,
    DateWithPrecision,
};
use crate::mapper::PropertyMapEntry;
use crate::taxonomy::{family_for_type, icon_for_type, Family, TypeCategoryCache};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Map entries every model-backed entity shares.
pub const COMMON_ENTRIES: &[PropertyMapEntry] = &[
    PropertyMapEntry::new("id", "item.id"),
    PropertyMapEntry::new("name", "item.title"),
    PropertyMapEntry::new("summary", "item.snippet"),
    PropertyMapEntry::new("description", "item.description"),
    PropertyMapEntry::new("tags", "item.tags"),
    PropertyMapEntry::new("typeKeywords", "item.typeKeywords"),
    PropertyMapEntry::new("owner", "item.owner"),
    PropertyMapEntry::new("access", "item.access"),
    PropertyMapEntry::new("orgId", "item.orgId"),
    PropertyMapEntry::new("culture", "item.culture"),
    PropertyMapEntry::new("thumbnail", "item.thumbnail"),
    PropertyMapEntry::new("createdDate", "item.created").transformed(iso_to_epoch, epoch_to_iso),
    PropertyMapEntry::new("updatedDate", "item.modified").transformed(iso_to_epoch, epoch_to_iso),
    PropertyMapEntry::new("location", "item.properties.location"),
    PropertyMapEntry::new("publishedDate", "item.properties.publishedDate")
        .transformed(from_date_with_precision, to_date_with_precision),
];

/// Portal and site-relative addresses of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityUrls {
    pub portal: String,
    pub relative: String,
}

impl EntityUrls {
    /// Urls of a content-like item.
    #[must_use]
    pub fn for_item(options: &RequestOptions, family: Family, id: &str, identifier: &str) -> Self {
        Self {
            portal: format!("{}/home/item.html?id={id}", options.portal_base()),
            relative: format!("/{family}s/{identifier}"),
        }
    }
}

/// The human-facing identifier: the item's slug if it has one, else its id.
#[must_use]
pub fn identifier(item: &Item) -> String {
    item.slug().unwrap_or(&item.id).to_string()
}

/// Fields computed from the backing item at composition time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Derived {
    pub identifier: String,
    pub family: Family,
    pub category: String,
    pub icon: String,
    pub urls: EntityUrls,
}

impl Derived {
    #[must_use]
    pub fn for_item(item: &Item, options: &RequestOptions, cache: &TypeCategoryCache) -> Self {
        let family = family_for_type(&item.item_type);
        let identifier = identifier(item);
        Self {
            urls: EntityUrls::for_item(options, family, &item.id, &identifier),
            identifier,
            family,
            category: cache.category_for_type(&item.item_type).to_string(),
            icon: icon_for_type(&item.item_type).to_string(),
        }
    }
}

/// Fields every model-backed entity maps through [`COMMON_ENTRIES`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityBase {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<DateWithPrecision>,
}

impl EntityBase {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

pub(crate) fn epoch_millis(millis: Option<i64>) -> Option<DateTime<Utc>> {
    millis.and_then(DateTime::<Utc>::from_timestamp_millis)
}
