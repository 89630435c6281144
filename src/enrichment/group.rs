use super::{single, subject_field, EnrichmentKind, UnknownEnrichment};
use crate::config::RequestOptions;
use crate::store::{HubStore, StoreError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Enrichments available for groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupEnrichment {
    /// The group owner's user record.
    Owner,
    /// Member usernames.
    Members,
    /// Items shared with the group.
    Content,
}

impl FromStr for GroupEnrichment {
    type Err = UnknownEnrichment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "members" => Ok(Self::Members),
            "content" => Ok(Self::Content),
            _ => Err(UnknownEnrichment(s.to_string())),
        }
    }
}

impl fmt::Display for GroupEnrichment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[async_trait]
impl EnrichmentKind for GroupEnrichment {
    const SUBJECT: &'static str = "group";
    const DEFAULTS: &'static [Self] = &[Self::Members];

    fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Members => "members",
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
            Self::Owner => {
                let owner = subject_field(data, Self::SUBJECT, "owner")?;
                serde_json::to_value(store.fetch_user(owner, options).await?)?
            }
            Self::Members => {
                let id = subject_field(data, Self::SUBJECT, "id")?;
                Value::from(store.fetch_group_members(id, options).await?)
            }
            Self::Content => {
                let id = subject_field(data, Self::SUBJECT, "id")?;
                serde_json::to_value(store.fetch_group_content(id, options).await?)?
            }
        };
        Ok(single(self.as_str(), value))
    }
}
