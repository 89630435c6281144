use crate::config::RequestOptions;
use crate::store::StoreError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// A named asynchronous fetch contributing keys to the enrichment data.
#[async_trait]
pub trait Operation: Send + Sync {
    /// Name recorded in the operation stack.
    fn name(&self) -> String;

    /// Fetch this operation's keys, given everything fetched so far.
    async fn fetch(
        &self,
        data: &Map<String, Value>,
        options: &RequestOptions,
    ) -> Result<Map<String, Value>, StoreError>;
}
