//! Boundary to the backing item/group/user platform.
//!
//! The composition engine never talks to the network itself; every fetch
//! goes through an injected [`HubStore`]. Implementations are expected to
//! be thin adapters over the platform's endpoints and must not retry,
//! rate-limit or cache on the engine's behalf.

mod memory;

pub use memory::{MemoryStore, StoreSnapshot};

use crate::config::RequestOptions;
use crate::item::{Group, Item, Model, User};
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Cannot resolve {0}")]
    Unresolvable(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            id: id.into(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Platform operations the engine depends on.
#[async_trait]
pub trait HubStore: Send + Sync {
    async fn fetch_item(&self, id: &str, options: &RequestOptions) -> Result<Item, StoreError>;

    async fn fetch_item_data(&self, id: &str, options: &RequestOptions)
        -> Result<Value, StoreError>;

    async fn fetch_item_metadata(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<Value, StoreError>;

    /// Ids of the groups an item is shared with.
    async fn fetch_item_groups(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<Vec<String>, StoreError>;

    /// Persist a new model and return the id assigned to it.
    async fn create_item(&self, model: &Model, options: &RequestOptions)
        -> Result<String, StoreError>;

    async fn update_item(&self, model: &Model, options: &RequestOptions) -> Result<(), StoreError>;

    async fn remove_item(&self, id: &str, options: &RequestOptions) -> Result<(), StoreError>;

    async fn fetch_group(&self, id: &str, options: &RequestOptions) -> Result<Group, StoreError>;

    /// Usernames of a group's members.
    async fn fetch_group_members(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<Vec<String>, StoreError>;

    async fn fetch_group_content(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<Vec<Item>, StoreError>;

    async fn fetch_user(&self, username: &str, options: &RequestOptions)
        -> Result<User, StoreError>;

    async fn fetch_user_content(
        &self,
        username: &str,
        options: &RequestOptions,
    ) -> Result<Vec<Item>, StoreError>;

    async fn fetch_org(&self, org_id: &str, options: &RequestOptions) -> Result<Value, StoreError>;

    /// Service definition behind an item URL.
    async fn fetch_service(&self, url: &str, options: &RequestOptions)
        -> Result<Value, StoreError>;

    async fn fetch_layers(&self, url: &str, options: &RequestOptions)
        -> Result<Vec<Value>, StoreError>;

    async fn fetch_record_count(&self, url: &str, options: &RequestOptions)
        -> Result<u64, StoreError>;
}
