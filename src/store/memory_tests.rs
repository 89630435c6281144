use super::*;
use serde_json::json;

fn options() -> RequestOptions {
    RequestOptions::new("https://hub.example.com")
}

fn seeded() -> MemoryStore {
    let mut parks = Item::new("parks", "Feature Service");
    parks.owner = "casey".to_string();
    parks.url = Some("https://services.example.com/parks/FeatureServer".to_string());
    MemoryStore::new(
        StoreSnapshot::default()
            .with_item(parks)
            .with_data("parks", json!({ "layers": [] }))
            .with_item_groups("parks", &["g1"])
            .with_group(Group {
                id: "g1".to_string(),
                title: "Open Data".to_string(),
                ..Group::default()
            })
            .with_group_members("g1", &["casey", "robin"])
            .with_user(User {
                username: "casey".to_string(),
                org_id: Some("org1".to_string()),
                ..User::default()
            })
            .with_service(
                "https://services.example.com/parks/FeatureServer",
                json!({ "layers": [{ "id": 0 }, { "id": 1 }] }),
            ),
    )
}

#[tokio::test]
async fn test_fetch_item_found_and_missing() {
    let store = seeded();
    let item = store.fetch_item("parks", &options()).await.unwrap();
    assert_eq!(item.item_type, "Feature Service");

    let err = store.fetch_item("nope", &options()).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(format!("{err}").contains("nope"));
}

#[tokio::test]
async fn test_item_groups_default_to_empty_for_known_items() {
    let store = MemoryStore::new(StoreSnapshot::default().with_item(Item::new("x", "PDF")));
    assert!(store.fetch_item_groups("x", &options()).await.unwrap().is_empty());
    assert!(store.fetch_item_groups("y", &options()).await.is_err());
}

#[tokio::test]
async fn test_group_content_follows_item_groups() {
    let store = seeded();
    let content = store.fetch_group_content("g1", &options()).await.unwrap();
    assert_eq!(content.len(), 1);
    assert_eq!(content.first().map(|item| item.id.as_str()), Some("parks"));
    assert!(store.fetch_group_content("g2", &options()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_user_content_filters_by_owner() {
    let store = seeded();
    assert_eq!(store.fetch_user_content("casey", &options()).await.unwrap().len(), 1);
    assert!(store.fetch_user_content("robin", &options()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_layers_read_from_service() {
    let store = seeded();
    let layers = store
        .fetch_layers("https://services.example.com/parks/FeatureServer", &options())
        .await
        .unwrap();
    assert_eq!(layers.len(), 2);
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamps() {
    let store = MemoryStore::default();
    let model = Model::new(Item::new("", "Hub Project"), json!({ "status": "active" }));
    let id = store.create_item(&model, &options()).await.unwrap();
    assert!(!id.is_empty());

    let item = store.fetch_item(&id, &options()).await.unwrap();
    assert_eq!(item.id, id);
    assert!(item.created.is_some());
    assert_eq!(
        store.fetch_item_data(&id, &options()).await.unwrap(),
        json!({ "status": "active" })
    );
}

#[tokio::test]
async fn test_update_requires_existing_item() {
    let store = seeded();
    let missing = Model::from_item(Item::new("missing", "Hub Page"));
    assert!(store.update_item(&missing, &options()).await.is_err());

    let mut model = Model::from_item(store.fetch_item("parks", &options()).await.unwrap());
    model.item.title = "City Parks".to_string();
    store.update_item(&model, &options()).await.unwrap();
    let item = store.fetch_item("parks", &options()).await.unwrap();
    assert_eq!(item.title, "City Parks");
    assert!(item.modified.is_some());
}

#[tokio::test]
async fn test_remove_item_clears_related_entries() {
    let store = seeded();
    store.remove_item("parks", &options()).await.unwrap();
    assert!(store.fetch_item("parks", &options()).await.is_err());
    assert!(store.snapshot().await.item_groups.is_empty());
    assert!(store.remove_item("parks", &options()).await.is_err());
}

#[tokio::test]
async fn test_failing_call_is_injected_and_recorded() {
    let store = seeded().failing("fetch_group");
    let err = store.fetch_group("g1", &options()).await.unwrap_err();
    assert!(matches!(err, StoreError::Request(_)));
    assert!(store.fetch_user("casey", &options()).await.is_ok());
    assert_eq!(store.calls().await, vec!["fetch_group", "fetch_user"]);
}

#[tokio::test(start_paused = true)]
async fn test_latency_delays_call() {
    let store = seeded().with_latency("fetch_org", Duration::from_millis(500));
    let started = tokio::time::Instant::now();
    let _ = store.fetch_org("org1", &options()).await;
    assert!(started.elapsed() >= Duration::from_millis(500));
}

#[test]
fn test_snapshot_from_json() {
    let store = MemoryStore::from_json(json!({
        "items": { "a": { "id": "a", "type": "Web Map" } },
        "recordCounts": { "https://x/0": 12 }
    }))
    .unwrap();
    assert_eq!(store.failing.len(), 0);
    assert!(MemoryStore::from_json(json!({ "items": 3 })).is_err());
}
