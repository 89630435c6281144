//! In-process store backed by JSON maps.
//!
//! Used by the CLI to serve a snapshot file and by tests to script the
//! platform: individual calls can be made to fail or to respond slowly, and
//! every call is recorded in order.

use super::{HubStore, StoreError};
use crate::config::RequestOptions;
use crate::item::{Group, Item, Model, User};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// Serializable contents of a [`MemoryStore`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreSnapshot {
    pub items: BTreeMap<String, Item>,
    pub data: BTreeMap<String, Value>,
    pub metadata: BTreeMap<String, Value>,
    /// Item id to the ids of the groups it is shared with.
    pub item_groups: BTreeMap<String, Vec<String>>,
    pub groups: BTreeMap<String, Group>,
    /// Group id to member usernames.
    pub group_members: BTreeMap<String, Vec<String>>,
    pub users: BTreeMap<String, User>,
    pub orgs: BTreeMap<String, Value>,
    /// Service URL to service definition.
    pub services: BTreeMap<String, Value>,
    pub record_counts: BTreeMap<String, u64>,
}

impl StoreSnapshot {
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.insert(item.id.clone(), item);
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: Model) -> Self {
        self.data.insert(model.item.id.clone(), model.data);
        self.with_item(model.item)
    }

    #[must_use]
    pub fn with_data(mut self, id: &str, data: Value) -> Self {
        self.data.insert(id.to_string(), data);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, id: &str, metadata: Value) -> Self {
        self.metadata.insert(id.to_string(), metadata);
        self
    }

    #[must_use]
    pub fn with_item_groups(mut self, id: &str, group_ids: &[&str]) -> Self {
        self.item_groups.insert(
            id.to_string(),
            group_ids.iter().map(ToString::to_string).collect(),
        );
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.insert(group.id.clone(), group);
        self
    }

    #[must_use]
    pub fn with_group_members(mut self, id: &str, usernames: &[&str]) -> Self {
        self.group_members.insert(
            id.to_string(),
            usernames.iter().map(ToString::to_string).collect(),
        );
        self
    }

    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.username.clone(), user);
        self
    }

    #[must_use]
    pub fn with_org(mut self, org_id: &str, org: Value) -> Self {
        self.orgs.insert(org_id.to_string(), org);
        self
    }

    #[must_use]
    pub fn with_service(mut self, url: &str, service: Value) -> Self {
        self.services.insert(url.to_string(), service);
        self
    }

    #[must_use]
    pub fn with_record_count(mut self, url: &str, count: u64) -> Self {
        self.record_counts.insert(url.to_string(), count);
        self
    }
}

/// A [`HubStore`] held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreSnapshot>,
    failing: HashSet<String>,
    latency: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(snapshot: StoreSnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
            ..Self::default()
        }
    }

    /// Build a store from a JSON snapshot document.
    pub fn from_json(value: Value) -> Result<Self, StoreError> {
        Ok(Self::new(serde_json::from_value(value)?))
    }

    /// Make every call named `call` (e.g. `"fetch_service"`) fail.
    #[must_use]
    pub fn failing(mut self, call: &str) -> Self {
        self.failing.insert(call.to_string());
        self
    }

    /// Delay every call named `call` by `latency` before it answers.
    #[must_use]
    pub fn with_latency(mut self, call: &str, latency: Duration) -> Self {
        self.latency.insert(call.to_string(), latency);
        self
    }

    /// Names of the calls made so far, in order.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.read().await.clone()
    }

    async fn begin(&self, call: &str) -> Result<(), StoreError> {
        self.calls.lock().await.push(call.to_string());
        if let Some(latency) = self.latency.get(call) {
            tokio::time::sleep(*latency).await;
        }
        if self.failing.contains(call) {
            debug!(call, "Injected store failure");
            return Err(StoreError::Request(format!("{call} failed")));
        }
        Ok(())
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[async_trait]
impl HubStore for MemoryStore {
    async fn fetch_item(&self, id: &str, _options: &RequestOptions) -> Result<Item, StoreError> {
        self.begin("fetch_item").await?;
        let state = self.state.read().await;
        state
            .items
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Item", id))
    }

    async fn fetch_item_data(
        &self,
        id: &str,
        _options: &RequestOptions,
    ) -> Result<Value, StoreError> {
        self.begin("fetch_item_data").await?;
        let state = self.state.read().await;
        state
            .data
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Item data", id))
    }

    async fn fetch_item_metadata(
        &self,
        id: &str,
        _options: &RequestOptions,
    ) -> Result<Value, StoreError> {
        self.begin("fetch_item_metadata").await?;
        let state = self.state.read().await;
        state
            .metadata
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Item metadata", id))
    }

    async fn fetch_item_groups(
        &self,
        id: &str,
        _options: &RequestOptions,
    ) -> Result<Vec<String>, StoreError> {
        self.begin("fetch_item_groups").await?;
        let state = self.state.read().await;
        if !state.items.contains_key(id) {
            return Err(StoreError::not_found("Item", id));
        }
        Ok(state.item_groups.get(id).cloned().unwrap_or_default())
    }

    async fn create_item(
        &self,
        model: &Model,
        _options: &RequestOptions,
    ) -> Result<String, StoreError> {
        self.begin("create_item").await?;
        let id = uuid::Uuid::new_v4().simple().to_string();
        let now = now_millis();
        let mut item = model.item.clone();
        item.id.clone_from(&id);
        item.created = Some(now);
        item.modified = Some(now);

        let mut state = self.state.write().await;
        state.data.insert(id.clone(), model.data.clone());
        state.items.insert(id.clone(), item);
        debug!(id = %id, "Created item");
        Ok(id)
    }

    async fn update_item(&self, model: &Model, _options: &RequestOptions) -> Result<(), StoreError> {
        self.begin("update_item").await?;
        let mut state = self.state.write().await;
        if !state.items.contains_key(&model.item.id) {
            return Err(StoreError::not_found("Item", &model.item.id));
        }
        let mut item = model.item.clone();
        item.modified = Some(now_millis());
        state.data.insert(item.id.clone(), model.data.clone());
        state.items.insert(item.id.clone(), item);
        Ok(())
    }

    async fn remove_item(&self, id: &str, _options: &RequestOptions) -> Result<(), StoreError> {
        self.begin("remove_item").await?;
        let mut state = self.state.write().await;
        if state.items.remove(id).is_none() {
            return Err(StoreError::not_found("Item", id));
        }
        state.data.remove(id);
        state.metadata.remove(id);
        state.item_groups.remove(id);
        Ok(())
    }

    async fn fetch_group(&self, id: &str, _options: &RequestOptions) -> Result<Group, StoreError> {
        self.begin("fetch_group").await?;
        let state = self.state.read().await;
        state
            .groups
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Group", id))
    }

    async fn fetch_group_members(
        &self,
        id: &str,
        _options: &RequestOptions,
    ) -> Result<Vec<String>, StoreError> {
        self.begin("fetch_group_members").await?;
        let state = self.state.read().await;
        if !state.groups.contains_key(id) {
            return Err(StoreError::not_found("Group", id));
        }
        Ok(state.group_members.get(id).cloned().unwrap_or_default())
    }

    async fn fetch_group_content(
        &self,
        id: &str,
        _options: &RequestOptions,
    ) -> Result<Vec<Item>, StoreError> {
        self.begin("fetch_group_content").await?;
        let state = self.state.read().await;
        Ok(state
            .items
            .values()
            .filter(|item| {
                state
                    .item_groups
                    .get(&item.id)
                    .is_some_and(|groups| groups.iter().any(|group| group == id))
            })
            .cloned()
            .collect())
    }

    async fn fetch_user(
        &self,
        username: &str,
        _options: &RequestOptions,
    ) -> Result<User, StoreError> {
        self.begin("fetch_user").await?;
        let state = self.state.read().await;
        state
            .users
            .get(username)
            .cloned()
            .ok_or_else(|| StoreError::not_found("User", username))
    }

    async fn fetch_user_content(
        &self,
        username: &str,
        _options: &RequestOptions,
    ) -> Result<Vec<Item>, StoreError> {
        self.begin("fetch_user_content").await?;
        let state = self.state.read().await;
        Ok(state
            .items
            .values()
            .filter(|item| item.owner == username)
            .cloned()
            .collect())
    }

    async fn fetch_org(&self, org_id: &str, _options: &RequestOptions) -> Result<Value, StoreError> {
        self.begin("fetch_org").await?;
        let state = self.state.read().await;
        state
            .orgs
            .get(org_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Org", org_id))
    }

    async fn fetch_service(
        &self,
        url: &str,
        _options: &RequestOptions,
    ) -> Result<Value, StoreError> {
        self.begin("fetch_service").await?;
        let state = self.state.read().await;
        state
            .services
            .get(url)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Service", url))
    }

    async fn fetch_layers(
        &self,
        url: &str,
        _options: &RequestOptions,
    ) -> Result<Vec<Value>, StoreError> {
        self.begin("fetch_layers").await?;
        let state = self.state.read().await;
        let service = state
            .services
            .get(url)
            .ok_or_else(|| StoreError::not_found("Service", url))?;
        Ok(service
            .get("layers")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_record_count(
        &self,
        url: &str,
        _options: &RequestOptions,
    ) -> Result<u64, StoreError> {
        self.begin("fetch_record_count").await?;
        let state = self.state.read().await;
        state
            .record_counts
            .get(url)
            .copied()
            .ok_or_else(|| StoreError::not_found("Record count", url))
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod memory_tests;
