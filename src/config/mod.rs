//! Request options and SDK configuration.
//!
//! [`RequestOptions`] is the opaque request/auth configuration threaded
//! through every store call. [`SdkConfig`] is the optional on-disk
//! configuration loaded from `~/.hub/config.toml`; if the file does not exist
//! all fields fall back to their `Default` values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Missing required request option: {0}")]
    MissingRequestOptions(&'static str),
}

/// Request configuration passed unmodified to every store operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// Base URL of the portal, e.g. `https://org.example.com/portal`.
    pub portal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl RequestOptions {
    #[must_use]
    pub fn new(portal: impl Into<String>) -> Self {
        Self {
            portal: portal.into(),
            token: None,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Reject options that cannot address a portal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.portal.trim().is_empty() {
            return Err(ConfigError::MissingRequestOptions("portal"));
        }
        Ok(())
    }

    /// Portal URL without a trailing slash.
    #[must_use]
    pub fn portal_base(&self) -> &str {
        self.portal.trim_end_matches('/')
    }
}

fn default_status_timeout_ms() -> u64 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

/// SDK configuration, deserialized from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdkConfig {
    #[serde(default)]
    pub portal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// How long a service status check waits before reporting `Slow`.
    #[serde(default = "default_status_timeout_ms")]
    pub status_timeout_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_json: bool,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            portal: String::new(),
            token: None,
            status_timeout_ms: default_status_timeout_ms(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl SdkConfig {
    /// Build request options from the configured portal and token.
    #[must_use]
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions {
            portal: self.portal.clone(),
            token: self.token.clone(),
        }
    }

    #[must_use]
    pub fn status_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.status_timeout_ms)
    }
}

/// Resolve the default config location (`~/.hub/config.toml`).
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".hub").join("config.toml"))
}

/// Load the configuration at `path`.
///
/// Returns `Ok(SdkConfig::default())` if the file does not exist.
pub async fn load_config(path: &Path) -> Result<SdkConfig, ConfigError> {
    if !path.exists() {
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(SdkConfig::default());
    }
    let content = tokio::fs::read_to_string(path).await?;
    let config: SdkConfig = toml::from_str(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}
