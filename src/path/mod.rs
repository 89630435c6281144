//! Dotted-path access into nested `serde_json` values.
//!
//! Paths are plain `.`-separated segment lists (`"item.properties.location"`).
//! Numeric segments index into arrays, and the `length` segment reads the
//! length of an array or string. Reads never fail: a missing or `null`
//! intermediate simply yields `None`.

use serde_json::{Map, Value};
use std::borrow::Cow;

/// Read the value at `path` inside `root`.
///
/// Returns `None` when any intermediate segment is missing, `null`, or not a
/// container. A trailing `length` segment on an array or string yields its
/// length as an owned number.
#[must_use]
pub fn get_path<'a>(root: &'a Value, path: &str) -> Option<Cow<'a, Value>> {
    let mut segments = path.split('.').peekable();
    let mut current = root;
    while let Some(segment) = segments.next() {
        if segment == "length" {
            if let Some(len) = length_of(current) {
                return segments.peek().is_none().then(|| Cow::Owned(Value::from(len)));
            }
        }
        current = child(current, segment)?;
    }
    Some(Cow::Borrowed(current))
}

/// Owned variant of [`get_path`].
#[must_use]
pub fn get_value(root: &Value, path: &str) -> Option<Value> {
    get_path(root, path).map(Cow::into_owned)
}

/// Write `value` at `path` inside `root`, creating intermediate containers.
///
/// A numeric segment creates an array, any other segment an object. An
/// intermediate that is not a compatible container is replaced. Arrays are
/// padded with `null` up to the written index.
pub fn set_path(root: &mut Value, path: &str, value: Value) {
    let mut current = root;
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        let Some(slot) = child_mut(current, segment) else {
            return;
        };
        if segments.peek().is_none() {
            *slot = value;
            return;
        }
        current = slot;
    }
}

/// Chaining form of [`set_path`]: takes ownership and returns the updated root.
#[must_use]
pub fn with_path(mut root: Value, path: &str, value: Value) -> Value {
    set_path(&mut root, path, value);
    root
}

fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        Value::String(s) => Some(s.chars().count()),
        _ => None,
    }
}

fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => parse_index(segment).and_then(|i| items.get(i)),
        _ => None,
    }
}

fn child_mut<'a>(parent: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    let index = parse_index(segment);
    let compatible = match parent {
        Value::Object(_) => true,
        Value::Array(_) => index.is_some(),
        _ => false,
    };
    if !compatible {
        *parent = if index.is_some() {
            Value::Array(Vec::new())
        } else {
            Value::Object(Map::new())
        };
    }
    match (parent, index) {
        (Value::Array(items), Some(index)) => {
            if index >= items.len() {
                items.resize(index.saturating_add(1), Value::Null);
            }
            items.get_mut(index)
        }
        (Value::Object(map), _) => Some(map.entry(segment).or_insert(Value::Null)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod path_tests;
