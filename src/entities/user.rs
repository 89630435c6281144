use super::common::epoch_millis;
use super::{EntityError, EntityUrls};
use crate::config::RequestOptions;
use crate::enrichment::{enrich, EnrichmentOutcome, UserEnrichment};
use crate::item::User;
use crate::pipeline::EnrichmentError;
use crate::store::HubStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A platform user composed with its enrichments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubUser {
    pub username: String,
    /// Full name, falling back to the username.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<Value>,
    pub urls: EntityUrls,
    pub enrichments: Map<String, Value>,
    pub errors: Vec<EnrichmentError>,
    pub user: User,
}

#[must_use]
pub fn compose_user(user: User, outcome: EnrichmentOutcome, options: &RequestOptions) -> HubUser {
    let urls = EntityUrls {
        portal: format!("{}/home/user.html?user={}", options.portal_base(), user.username),
        relative: format!("/users/{}", user.username),
    };

    HubUser {
        username: user.username.clone(),
        name: user.full_name.clone().unwrap_or_else(|| user.username.clone()),
        email: user.email.clone(),
        org_id: user.org_id.clone(),
        role: user.role.clone(),
        created_date: epoch_millis(user.created),
        org: outcome.get("org").cloned(),
        urls,
        enrichments: outcome.values,
        errors: outcome.errors,
        user,
    }
}

pub async fn fetch_user<S: AsRef<str> + Sync>(
    username: &str,
    include: &[S],
    store: &dyn HubStore,
    options: &RequestOptions,
) -> Result<HubUser, EntityError> {
    options.validate()?;
    let user = store.fetch_user(username, options).await?;
    let outcome =
        enrich::<UserEnrichment, S>(serde_json::to_value(&user)?, include, store, options).await;
    Ok(compose_user(user, outcome, options))
}
