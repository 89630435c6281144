use super::{single, subject_field, EnrichmentKind, UnknownEnrichment};
use crate::config::RequestOptions;
use crate::store::{HubStore, StoreError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Enrichments available for users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserEnrichment {
    Org,
    /// Items the user owns.
    Content,
}

impl FromStr for UserEnrichment {
    type Err = UnknownEnrichment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "org" => Ok(Self::Org),
            "content" => Ok(Self::Content),
            _ => Err(UnknownEnrichment(s.to_string())),
        }
    }
}

impl fmt::Display for UserEnrichment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[async_trait]
impl EnrichmentKind for UserEnrichment {
    const SUBJECT: &'static str = "user";
    const DEFAULTS: &'static [Self] = &[Self::Org];

    fn as_str(self) -> &'static str {
        match self {
            Self::Org => "org",
            Self::Content => "content",
        }
    }

    async fn fetch(
        self,
        data: &Map<String, Value>,
        store: &dyn HubStore,
        options: &RequestOptions,
    ) -> Result<Map<String, Value>, StoreError> {
        let value = match self {
            Self::Org => {
                let org_id = subject_field(data, Self::SUBJECT, "orgId")?;
                store.fetch_org(org_id, options).await?
            }
            Self::Content => {
                let username = subject_field(data, Self::SUBJECT, "username")?;
                serde_json::to_value(store.fetch_user_content(username, options).await?)?
            }
        };
        Ok(single(self.as_str(), value))
    }
}
