use super::common::{epoch_millis, Derived};
use super::EntityError;
use crate::config::RequestOptions;
use crate::enrichment::{enrich, ContentEnrichment, EnrichmentOutcome};
use crate::item::{Item, User};
use crate::mapper::dates::{parse_date_with_precision, DateWithPrecision};
use crate::pipeline::EnrichmentError;
use crate::store::HubStore;
use crate::taxonomy::TypeCategoryCache;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// A content item composed with its enrichments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubContent {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    pub tags: Vec<String>,
    /// Service URL, for service-backed items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<DateWithPrecision>,
    #[serde(flatten)]
    pub derived: Derived,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_user: Option<User>,
    pub group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// Values requested through `include`, keyed by destination property.
    pub enrichments: Map<String, Value>,
    pub errors: Vec<EnrichmentError>,
    pub item: Item,
}

/// Compose a content entity from an item and its enrichment outcome.
#[must_use]
pub fn compose_content(
    item: Item,
    outcome: EnrichmentOutcome,
    options: &RequestOptions,
    cache: &TypeCategoryCache,
) -> HubContent {
    let owner_user = outcome
        .get("ownerUser")
        .and_then(|user| serde_json::from_value(user.clone()).ok());
    let group_ids = outcome
        .get("groupIds")
        .and_then(|ids| serde_json::from_value(ids.clone()).ok())
        .unwrap_or_default();
    let published_date = item
        .property_str("publishedDate")
        .and_then(parse_date_with_precision);

    HubContent {
        id: item.id.clone(),
        name: item.title.clone(),
        item_type: item.item_type.clone(),
        summary: item.snippet.clone().or_else(|| item.description.clone()),
        description: item.description.clone(),
        owner: item.owner.clone(),
        access: item.access.clone(),
        org_id: item.org_id.clone(),
        tags: item.tags.clone(),
        url: item.url.clone(),
        created_date: epoch_millis(item.created),
        updated_date: epoch_millis(item.modified),
        published_date,
        derived: Derived::for_item(&item, options, cache),
        owner_user,
        group_ids,
        metadata: outcome.get("metadata").cloned(),
        enrichments: outcome.values,
        errors: outcome.errors,
        item,
    }
}

/// Fetch an item and compose it with the enrichments `include` asks for.
///
/// Only a failure to fetch the item itself is an error; enrichment failures
/// end up in [`HubContent::errors`].
pub async fn fetch_content<S: AsRef<str> + Sync>(
    id: &str,
    include: &[S],
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<HubContent, EntityError> {
    options.validate()?;
    let item = store.fetch_item(id, options).await?;
    let outcome =
        enrich::<ContentEnrichment, S>(serde_json::to_value(&item)?, include, store, options).await;
    debug!(id, errors = outcome.errors.len(), "Composed content");
    Ok(compose_content(
        item,
        outcome,
        options,
        TypeCategoryCache::global(),
    ))
}
