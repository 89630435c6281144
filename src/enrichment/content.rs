use super::{single, subject_field, EnrichmentKind, UnknownEnrichment};
use crate::config::RequestOptions;
use crate::store::{HubStore, StoreError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Enrichments available for content items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentEnrichment {
    /// The item owner's user record.
    OwnerUser,
    /// The owning organization. Resolved from `ownerUser`, so it must run after it.
    Org,
    /// The item's data payload.
    Data,
    Metadata,
    /// Ids of the groups the item is shared with.
    GroupIds,
    /// The service definition behind the item URL.
    Server,
    Layers,
    RecordCount,
}

impl ContentEnrichment {
    pub const ALL: [Self; 8] = [
        Self::OwnerUser,
        Self::Org,
        Self::Data,
        Self::Metadata,
        Self::GroupIds,
        Self::Server,
        Self::Layers,
        Self::RecordCount,
    ];
}

impl FromStr for ContentEnrichment {
    type Err = UnknownEnrichment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ownerUser" => Ok(Self::OwnerUser),
            "org" => Ok(Self::Org),
            "data" => Ok(Self::Data),
            "metadata" => Ok(Self::Metadata),
            "groupIds" => Ok(Self::GroupIds),
            "server" => Ok(Self::Server),
            "layers" => Ok(Self::Layers),
            "recordCount" => Ok(Self::RecordCount),
            _ => Err(UnknownEnrichment(s.to_string())),
        }
    }
}

impl fmt::Display for ContentEnrichment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Org id from the fetched owner, falling back to the item's own org.
fn org_id(data: &Map<String, Value>) -> Result<&str, StoreError> {
    subject_field(data, "ownerUser", "orgId").or_else(|_| subject_field(data, "item", "orgId"))
}

#[async_trait]
impl EnrichmentKind for ContentEnrichment {
    const SUBJECT: &'static str = "item";
    const DEFAULTS: &'static [Self] = &[Self::OwnerUser, Self::GroupIds, Self::Metadata];

    fn as_str(self) -> &'static str {
        match self {
            Self::OwnerUser => "ownerUser",
            Self::Org => "org",
            Self::Data => "data",
            Self::Metadata => "metadata",
            Self::GroupIds => "groupIds",
            Self::Server => "server",
            Self::Layers => "layers",
            Self::RecordCount => "recordCount",
        }
    }

    async fn fetch(
        self,
        data: &Map<String, Value>,
        store: &dyn HubStore,
        options: &RequestOptions,
    ) -> Result<Map<String, Value>, StoreError> {
        let value = match self {
            Self::OwnerUser => {
                let owner = subject_field(data, Self::SUBJECT, "owner")?;
                serde_json::to_value(store.fetch_user(owner, options).await?)?
            }
            Self::Org => store.fetch_org(org_id(data)?, options).await?,
            Self::Data => {
                let id = subject_field(data, Self::SUBJECT, "id")?;
                store.fetch_item_data(id, options).await?
            }
            Self::Metadata => {
                let id = subject_field(data, Self::SUBJECT, "id")?;
                store.fetch_item_metadata(id, options).await?
            }
            Self::GroupIds => {
                let id = subject_field(data, Self::SUBJECT, "id")?;
                Value::from(store.fetch_item_groups(id, options).await?)
            }
            Self::Server => {
                let url = subject_field(data, Self::SUBJECT, "url")?;
                store.fetch_service(url, options).await?
            }
            Self::Layers => {
                let url = subject_field(data, Self::SUBJECT, "url")?;
                Value::Array(store.fetch_layers(url, options).await?)
            }
            Self::RecordCount => {
                let url = subject_field(data, Self::SUBJECT, "url")?;
                Value::from(store.fetch_record_count(url, options).await?)
            }
        };
        Ok(single(self.as_str(), value))
    }
}
