use crate::config::RequestOptions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Category of a captured enrichment failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrichmentErrorKind {
    Other,
}

/// A normalized enrichment failure, serialized as `{ "type", "message" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentError {
    #[serde(rename = "type")]
    pub kind: EnrichmentErrorKind,
    pub message: String,
}

impl EnrichmentError {
    pub fn other(message: impl Into<String>) -> Self {
        Self {
            kind: EnrichmentErrorKind::Other,
            message: message.into(),
        }
    }
}

/// One operation's entry in the diagnostic stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackEntry {
    pub name: String,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StackEntry {
    /// Elapsed time, once the operation has finished.
    #[must_use]
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|finished| finished - self.started_at)
    }
}

/// Ordered log of the operations a pipeline ran. Diagnostic only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationStack {
    entries: Vec<StackEntry>,
}

impl OperationStack {
    /// Record the start of `name` and return its position.
    pub fn start(&mut self, name: impl Into<String>) -> usize {
        self.entries.push(StackEntry {
            name: name.into(),
            started_at: Utc::now(),
            finished_at: None,
            error: None,
        });
        self.entries.len().saturating_sub(1)
    }

    pub fn finish(&mut self, index: usize, error: Option<String>) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.finished_at = Some(Utc::now());
            entry.error = error;
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }
}

/// The pipeline's unit of state.
///
/// `data` starts as `{ <subject>: <record> }` and only ever gains keys.
#[derive(Debug, Clone)]
pub struct EnrichmentContext {
    pub data: Map<String, Value>,
    pub errors: Vec<EnrichmentError>,
    pub stack: OperationStack,
    pub request_options: RequestOptions,
}

impl EnrichmentContext {
    #[must_use]
    pub fn new(subject_key: &str, subject: Value, request_options: RequestOptions) -> Self {
        let mut data = Map::new();
        data.insert(subject_key.to_string(), subject);
        Self {
            data,
            errors: Vec::new(),
            stack: OperationStack::default(),
            request_options,
        }
    }

    /// Add fetched keys. Keys already present are kept as they are.
    pub fn extend(&mut self, fetched: Map<String, Value>) {
        for (key, value) in fetched {
            if self.data.contains_key(&key) {
                warn!(key = %key, "Enrichment returned an existing key; keeping the original");
                continue;
            }
            self.data.insert(key, value);
        }
    }

    /// The accumulated data with the captured errors under `errors`.
    #[must_use]
    pub fn data_with_errors(&self) -> Map<String, Value> {
        let mut data = self.data.clone();
        let errors = self
            .errors
            .iter()
            .filter_map(|error| serde_json::to_value(error).ok())
            .collect();
        data.insert("errors".to_string(), Value::Array(errors));
        data
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.data_with_errors())
    }
}
