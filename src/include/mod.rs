//! The include mini-language.
//!
//! Callers ask for enrichment values with strings of the form
//! `"<enrichment>[.<path>] [AS <alias>]"`, e.g. `"groupIds"` or
//! `"server.layers.length AS layerCount"`. Each string parses into an
//! [`IncludeSpec`] naming the enrichment that must be fetched, the path to
//! pluck from the fetched data, and the property that receives the value.

use crate::path::get_value;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Literal separator between the include head and its alias.
pub const ALIAS_SEPARATOR: &str = " AS ";

/// A parsed include request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeSpec {
    /// First segment of the path; names the enrichment to fetch.
    pub enrichment: String,
    /// Full dotted path plucked from the enrichment data.
    pub path: String,
    /// Property the plucked value is attached under.
    pub prop: String,
}

impl IncludeSpec {
    /// Parse one include string. Parsing is total: every input yields a spec.
    ///
    /// Only the exact, case-sensitive `" AS "` separator introduces an alias,
    /// and only the text up to a second separator is used. An empty alias is
    /// treated as no alias.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut parts = input.split(ALIAS_SEPARATOR);
        let head = parts.next().unwrap_or_default();
        let alias = parts.next().filter(|alias| !alias.is_empty());

        let enrichment = head.split('.').next().unwrap_or_default();
        let prop = alias.unwrap_or_else(|| head.rsplit('.').next().unwrap_or_default());

        Self {
            enrichment: enrichment.to_string(),
            path: head.to_string(),
            prop: prop.to_string(),
        }
    }

    /// Whether the destination property was given explicitly.
    #[must_use]
    pub fn is_aliased(&self) -> bool {
        self.path.rsplit('.').next() != Some(self.prop.as_str())
    }
}

impl From<&str> for IncludeSpec {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl fmt::Display for IncludeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_aliased() {
            write!(f, "{}{ALIAS_SEPARATOR}{}", self.path, self.prop)
        } else {
            write!(f, "{}", self.path)
        }
    }
}

/// Parse every include string, preserving order.
#[must_use]
pub fn parse_includes<S: AsRef<str>>(includes: &[S]) -> Vec<IncludeSpec> {
    includes
        .iter()
        .map(|include| IncludeSpec::parse(include.as_ref()))
        .collect()
}

/// Derive the enrichment keys to fetch: `defaults` first, then each spec's
/// enrichment, deduplicated with the first occurrence winning.
#[must_use]
pub fn enrichment_keys(defaults: &[&str], specs: &[IncludeSpec]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::with_capacity(defaults.len().saturating_add(specs.len()));
    let candidates = defaults
        .iter()
        .copied()
        .chain(specs.iter().map(|spec| spec.enrichment.as_str()));
    for key in candidates {
        if !keys.iter().any(|existing| existing == key) {
            keys.push(key.to_string());
        }
    }
    keys
}

/// Pluck every spec's path out of the enrichment `data` into a property map.
///
/// Specs are applied in order, so a later spec writing the same `prop`
/// replaces an earlier one. A spec whose path is missing removes the prop,
/// matching an explicit "undefined" write.
#[must_use]
pub fn apply_includes(specs: &[IncludeSpec], data: &Map<String, Value>) -> Map<String, Value> {
    let mut values = Map::new();
    for spec in specs {
        match pluck(data, &spec.path) {
            Some(value) => {
                values.insert(spec.prop.clone(), value);
            }
            None => {
                values.remove(&spec.prop);
            }
        }
    }
    values
}

fn pluck(data: &Map<String, Value>, path: &str) -> Option<Value> {
    match path.split_once('.') {
        Some((head, rest)) => data.get(head).and_then(|value| get_value(value, rest)),
        None => data.get(path).cloned(),
    }
}
