//! Common test utilities

use hub_entities::{Group, Item, MemoryStore, RequestOptions, StoreSnapshot, User};
use serde_json::{json, Map};

pub const PORTAL: &str = "https://hub.example.com";
pub const SERVICE_URL: &str = "https://services.example.com/X/FeatureServer";

pub fn options() -> RequestOptions {
    RequestOptions::new(PORTAL).with_token("secret")
}

/// The `X` feature service item owned by `casey`.
pub fn feature_service() -> Item {
    let mut item = Item::new("X", "Feature Service");
    item.title = "Trees".to_string();
    item.owner = "casey".to_string();
    item.url = Some(SERVICE_URL.to_string());
    item.type_keywords = vec!["slug|city-trees".to_string()];
    let mut properties = Map::new();
    properties.insert("publishedDate".to_string(), json!("2022-05-01"));
    item.properties = Some(properties);
    item
}

/// A snapshot with one item, its owner, org, group and service.
pub fn snapshot() -> StoreSnapshot {
    StoreSnapshot::default()
        .with_item(feature_service())
        .with_data("X", json!({ "foo": "bar", "layers": 3 }))
        .with_metadata("X", json!({ "title": "Tree inventory" }))
        .with_item_groups("X", &["open-data"])
        .with_user(User {
            username: "casey".to_string(),
            full_name: Some("Casey Jones".to_string()),
            org_id: Some("org1".to_string()),
            ..User::default()
        })
        .with_org("org1", json!({ "id": "org1", "name": "City of Example" }))
        .with_group(Group {
            id: "open-data".to_string(),
            title: "Open Data".to_string(),
            owner: "casey".to_string(),
            ..Group::default()
        })
        .with_group_members("open-data", &["casey"])
        .with_service(SERVICE_URL, json!({ "layers": [{ "id": 0 }, { "id": 1 }] }))
        .with_record_count(SERVICE_URL, 120)
}

pub fn seeded_store() -> MemoryStore {
    MemoryStore::new(snapshot())
}

/// How many times `call` was made against `store`.
#[allow(dead_code)] // Not every test binary counts calls
pub async fn call_count(store: &MemoryStore, call: &str) -> usize {
    store.calls().await.iter().filter(|c| c.as_str() == call).count()
}
