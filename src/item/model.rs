use super::types::Item;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The unit persisted by the backing store: an item and its data payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub item: Item,
    #[serde(default = "empty_object")]
    pub data: Value,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl Model {
    #[must_use]
    pub fn new(item: Item, data: Value) -> Self {
        Self { item, data }
    }

    /// A model with the given item and an empty data object.
    #[must_use]
    pub fn from_item(item: Item) -> Self {
        Self::new(item, empty_object())
    }

    /// Nested JSON view used by the property mapper.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Rebuild a model from its nested JSON view.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
