//! Service availability check.
//!
//! The service definition fetch is raced against a timer. A fetch that
//! loses the race reports [`ServiceStatus::Slow`]: the service is degraded,
//! not failed.

use crate::config::RequestOptions;
use crate::store::HubStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ServiceStatus {
    Online,
    Offline { message: String },
    Slow,
}

impl ServiceStatus {
    #[must_use]
    pub fn is_online(&self) -> bool {
        matches!(self, ServiceStatus::Online)
    }
}

/// Check whether the service at `url` answers within `timeout`.
pub async fn check_service_status(
    store: &dyn HubStore,
    url: &str,
    timeout: Duration,
    options: &RequestOptions,
) -> ServiceStatus {
    let status = match tokio::time::timeout(timeout, store.fetch_service(url, options)).await {
        Ok(Ok(service)) => match service_error(&service) {
            Some(message) => ServiceStatus::Offline { message },
            None => ServiceStatus::Online,
        },
        Ok(Err(e)) => ServiceStatus::Offline {
            message: e.to_string(),
        },
        Err(_) => {
            warn!(url, timeout = ?timeout, "Service status check timed out");
            ServiceStatus::Slow
        }
    };
    debug!(url, status = ?status, "Checked service status");
    status
}

/// The error a service reports in-band as `{ "error": { "message" } }`.
fn service_error(service: &Value) -> Option<String> {
    let error = service.get("error")?;
    Some(
        error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Service reported an error")
            .to_string(),
    )
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
