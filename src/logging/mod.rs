//! Subscriber setup for binaries embedding the engine.
//!
//! The library itself only emits `tracing` events; nothing is installed
//! unless [`init_logging`] is called.

mod init;

pub use init::{init_logging, parse_level, parse_rotation};

use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;

/// Log filename written inside the log directory.
pub const LOG_FILENAME: &str = "hub-entities.log";

/// Configuration for the logging system.
pub struct LogConfig {
    /// Directory for rolling log files. `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
    /// Default level when `RUST_LOG` is not set.
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}

/// `~/.hub/logs`, or `./logs` when there is no home directory.
#[must_use]
pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hub")
        .join("logs")
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod logging_tests;
