use super::common::epoch_millis;
use super::{EntityError, EntityUrls};
use crate::config::RequestOptions;
use crate::enrichment::{enrich, EnrichmentOutcome, GroupEnrichment};
use crate::item::Group;
use crate::pipeline::EnrichmentError;
use crate::store::HubStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A platform group composed with its enrichments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubGroup {
    pub id: String,
    pub identifier: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub is_view_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    pub members: Vec<String>,
    /// `None` when the member list could not be fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<usize>,
    pub urls: EntityUrls,
    pub enrichments: Map<String, Value>,
    pub errors: Vec<EnrichmentError>,
    pub group: Group,
}

#[must_use]
pub fn compose_group(group: Group, outcome: EnrichmentOutcome, options: &RequestOptions) -> HubGroup {
    let members: Option<Vec<String>> = outcome
        .get("members")
        .and_then(|members| serde_json::from_value(members.clone()).ok());
    let urls = EntityUrls {
        portal: format!("{}/home/group.html?id={}", options.portal_base(), group.id),
        relative: format!("/groups/{}", group.id),
    };

    HubGroup {
        id: group.id.clone(),
        identifier: group.id.clone(),
        name: group.title.clone(),
        summary: group.snippet.clone(),
        description: group.description.clone(),
        owner: group.owner.clone(),
        access: group.access.clone(),
        tags: group.tags.clone(),
        thumbnail: group.thumbnail.clone(),
        is_view_only: group.is_view_only,
        created_date: epoch_millis(group.created),
        updated_date: epoch_millis(group.modified),
        member_count: members.as_ref().map(Vec::len),
        members: members.unwrap_or_default(),
        urls,
        enrichments: outcome.values,
        errors: outcome.errors,
        group,
    }
}

pub async fn fetch_group<S: AsRef<str> + Sync>(
    id: &str,
    include: &[S],
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<HubGroup, EntityError> {
    options.validate()?;
    let group = store.fetch_group(id, options).await?;
    let outcome =
        enrich::<GroupEnrichment, S>(serde_json::to_value(&group)?, include, store, options).await;
    Ok(compose_group(group, outcome, options))
}
