use super::*;
use crate::store::{MemoryStore, StoreSnapshot};
use serde_json::json;

const URL: &str = "https://services.example.com/parks/FeatureServer";

fn options() -> RequestOptions {
    RequestOptions::new("https://hub.example.com")
}

fn store() -> MemoryStore {
    MemoryStore::new(StoreSnapshot::default().with_service(URL, json!({ "layers": [] })))
}

#[tokio::test]
async fn test_answering_service_is_online() {
    let status = check_service_status(&store(), URL, Duration::from_secs(1), &options()).await;
    assert!(status.is_online());
}

#[tokio::test]
async fn test_failed_fetch_is_offline() {
    let status =
        check_service_status(&store(), "https://nowhere", Duration::from_secs(1), &options()).await;
    assert!(matches!(status, ServiceStatus::Offline { message } if message.contains("not found")));
}

#[tokio::test]
async fn test_in_band_error_is_offline() {
    let store = MemoryStore::new(
        StoreSnapshot::default()
            .with_service(URL, json!({ "error": { "code": 499, "message": "Token Required" } })),
    );
    let status = check_service_status(&store, URL, Duration::from_secs(1), &options()).await;
    assert_eq!(
        status,
        ServiceStatus::Offline {
            message: "Token Required".to_string()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_slow_service_is_degraded_not_failed() {
    let store = store().with_latency("fetch_service", Duration::from_secs(10));
    let status = check_service_status(&store, URL, Duration::from_secs(5), &options()).await;
    assert_eq!(status, ServiceStatus::Slow);
}

#[test]
fn test_status_serializes_with_tag() {
    let value = serde_json::to_value(ServiceStatus::Offline {
        message: "down".to_string(),
    })
    .unwrap();
    assert_eq!(value, json!({ "status": "offline", "message": "down" }));
}
