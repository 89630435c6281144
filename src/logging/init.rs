use color_eyre::eyre::Result;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use super::{LogConfig, LOG_FILENAME};

/// `RUST_LOG` if set, otherwise `hub_entities=<level>`.
fn default_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hub_entities={level}")))
}

/// Initialize the logging system with the given configuration.
///
/// Events go to stderr, keeping stdout free for command output, and to a
/// rolling file when `log_dir` is set. Both outputs use the same format.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let LogConfig {
        log_dir,
        log_level,
        json_format,
        rotation,
    } = config;

    let file_appender = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            Some(RollingFileAppender::new(rotation, dir, LOG_FILENAME))
        }
        None => None,
    };

    if json_format {
        let json_file_layer = file_appender.map(|appender| {
            fmt::layer()
                .json()
                .with_writer(appender)
                .with_span_events(FmtSpan::CLOSE)
                .with_current_span(true)
                .with_target(true)
                .with_filter(default_filter(log_level))
        });

        let json_stderr_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_target(true)
            .with_filter(default_filter(log_level));

        tracing_subscriber::registry()
            .with(json_file_layer)
            .with(json_stderr_layer)
            .with(ErrorLayer::default())
            .try_init()?;
    } else {
        let file_layer = file_appender.map(|appender| {
            fmt::layer()
                .with_writer(appender)
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_ansi(false)
                .with_filter(default_filter(log_level))
        });

        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_filter(default_filter(log_level));

        tracing_subscriber::registry()
            .with(file_layer)
            .with(stderr_layer)
            .with(ErrorLayer::default())
            .try_init()?;
    }

    Ok(())
}

/// Parse rotation period from string.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

/// Parse a level name such as `"debug"`, falling back to `INFO`.
#[must_use]
pub fn parse_level(s: &str) -> Level {
    s.trim().parse().unwrap_or(Level::INFO)
}
