//! Typed enrichment registries.
//!
//! Each subject family (content items, groups, users) owns an enum of the
//! enrichments it knows how to fetch. Caller-supplied include strings are
//! reduced to enrichment keys, resolved against the family's enum (unknown
//! keys are dropped), and run through a [`Pipeline`].

mod content;
mod group;
mod user;

pub use content::ContentEnrichment;
pub use group::GroupEnrichment;
pub use user::UserEnrichment;

use crate::config::RequestOptions;
use crate::include::{apply_includes, enrichment_keys, parse_includes, IncludeSpec};
use crate::pipeline::{
    EnrichmentContext, EnrichmentError, Operation, OperationStack, Pipeline,
};
use crate::store::{HubStore, StoreError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// An enrichment key that the subject family does not recognize.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown enrichment: {0}")]
pub struct UnknownEnrichment(pub String);

/// One subject family's closed set of enrichments.
#[async_trait]
pub trait EnrichmentKind:
    Copy + Send + Sync + fmt::Display + FromStr<Err = UnknownEnrichment> + 'static
{
    /// Key of the subject record in the enrichment data.
    const SUBJECT: &'static str;

    /// Enrichments fetched regardless of the caller's include list.
    const DEFAULTS: &'static [Self];

    fn as_str(self) -> &'static str;

    /// Fetch this enrichment's data, keyed by [`EnrichmentKind::as_str`].
    async fn fetch(
        self,
        data: &Map<String, Value>,
        store: &dyn HubStore,
        options: &RequestOptions,
    ) -> Result<Map<String, Value>, StoreError>;
}

/// Adapts an enrichment kind and a store into a pipeline operation.
pub struct KindOperation<'s, K> {
    kind: K,
    store: &'s dyn HubStore,
}

impl<'s, K: EnrichmentKind> KindOperation<'s, K> {
    #[must_use]
    pub fn new(kind: K, store: &'s dyn HubStore) -> Self {
        Self { kind, store }
    }
}

#[async_trait]
impl<'s, K: EnrichmentKind> Operation for KindOperation<'s, K> {
    fn name(&self) -> String {
        format!("{} {}", K::SUBJECT, self.kind)
    }

    async fn fetch(
        &self,
        data: &Map<String, Value>,
        options: &RequestOptions,
    ) -> Result<Map<String, Value>, StoreError> {
        self.kind.fetch(data, self.store, options).await
    }
}

/// Resolve string keys against `K`, silently dropping unknown keys.
#[must_use]
pub fn resolve_keys<K: EnrichmentKind>(keys: &[String]) -> Vec<K> {
    keys.iter()
        .filter_map(|key| match key.parse::<K>() {
            Ok(kind) => Some(kind),
            Err(e) => {
                debug!(subject = K::SUBJECT, error = %e, "Ignoring enrichment");
                None
            }
        })
        .collect()
}

/// Parse `include` and derive the enrichments to fetch, defaults first.
#[must_use]
pub fn plan<K: EnrichmentKind, S: AsRef<str>>(include: &[S]) -> (Vec<IncludeSpec>, Vec<K>) {
    let specs = parse_includes(include);
    let defaults: Vec<&str> = K::DEFAULTS.iter().map(|kind| kind.as_str()).collect();
    let keys = enrichment_keys(&defaults, &specs);
    (specs, resolve_keys(&keys))
}

/// Build the pipeline that fetches `kinds` from `store`, in order.
#[must_use]
pub fn build_pipeline<'s, K: EnrichmentKind>(kinds: &[K], store: &'s dyn HubStore) -> Pipeline<'s> {
    let operations: Vec<Box<dyn Operation + 's>> = kinds
        .iter()
        .map(|kind| Box::new(KindOperation::new(*kind, store)) as Box<dyn Operation + 's>)
        .collect();
    Pipeline::new(operations)
}

/// Everything one enrichment run produced.
#[derive(Debug, Clone, Default)]
pub struct EnrichmentOutcome {
    /// Subject plus one key per successful enrichment.
    pub data: Map<String, Value>,
    pub errors: Vec<EnrichmentError>,
    pub stack: OperationStack,
    /// Include values keyed by their destination property.
    pub values: Map<String, Value>,
}

impl EnrichmentOutcome {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

/// Fetch the enrichments `include` asks for (plus `K`'s defaults) for one
/// subject and pluck every include value.
pub async fn enrich<K: EnrichmentKind, S: AsRef<str> + Sync>(
    subject: Value,
    include: &[S],
    store: &dyn HubStore,
    options: &RequestOptions,
) -> EnrichmentOutcome {
    let (specs, kinds) = plan::<K, S>(include);
    let pipeline = build_pipeline(&kinds, store);
    let context = EnrichmentContext::new(K::SUBJECT, subject, options.clone());
    let context = pipeline.run(context).await;

    let values = apply_includes(&specs, &context.data_with_errors());
    EnrichmentOutcome {
        data: context.data,
        errors: context.errors,
        stack: context.stack,
        values,
    }
}

/// Read a non-empty string field of the subject record.
fn subject_field<'d>(
    data: &'d Map<String, Value>,
    subject: &str,
    field: &str,
) -> Result<&'d str, StoreError> {
    data.get(subject)
        .and_then(|record| record.get(field))
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| StoreError::Unresolvable(format!("{subject}.{field}")))
}

fn single(key: &str, value: Value) -> Map<String, Value> {
    let mut fetched = Map::new();
    fetched.insert(key.to_string(), value);
    fetched
}
