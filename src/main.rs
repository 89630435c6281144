#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing
    )
)]

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use hub_entities::config::default_config_path;
use hub_entities::logging::{init_logging, parse_level, parse_rotation, LogConfig};
use hub_entities::{
    check_service_status, fetch_content, fetch_group, fetch_initiative, fetch_page,
    fetch_project, fetch_site, fetch_user, load_config, HubStore, MemoryStore, RequestOptions,
    SdkConfig,
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Hub Entities - compose hub platform items into enriched entities
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON store snapshot to serve entities from
    #[arg(long, env = "HUB_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Config file (default: ~/.hub/config.toml)
    #[arg(long, env = "HUB_CONFIG")]
    config: Option<PathBuf>,

    /// Portal URL, overriding the config file
    #[arg(long, env = "HUB_PORTAL")]
    portal: Option<String>,

    /// Enable JSON log format
    #[arg(long, env = "HUB_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "HUB_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Also write rolling log files into this directory
    #[arg(long, env = "HUB_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a content item
    Content {
        id: String,
        /// Include spec, e.g. "server.layers.length AS layerCount"
        #[arg(short, long = "include")]
        include: Vec<String>,
    },
    /// Compose a group
    Group {
        id: String,
        #[arg(short, long = "include")]
        include: Vec<String>,
    },
    /// Compose a user
    User {
        username: String,
        #[arg(short, long = "include")]
        include: Vec<String>,
    },
    Project { id: String },
    Initiative { id: String },
    Site { id: String },
    Page { id: String },
    /// Check whether a service answers in time
    Status {
        url: String,
        /// Overrides `status_timeout_ms` from the config file
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
}

async fn load_snapshot(path: &Path) -> Result<MemoryStore> {
    let content = tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| format!("Failed to read snapshot {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)?;
    Ok(MemoryStore::from_json(value)?)
}

async fn run(
    command: Command,
    store: &dyn HubStore,
    options: &RequestOptions,
    config: &SdkConfig,
) -> Result<Value> {
    let value = match command {
        Command::Content { id, include } => {
            serde_json::to_value(fetch_content(&id, &include, store, options).await?)?
        }
        Command::Group { id, include } => {
            serde_json::to_value(fetch_group(&id, &include, store, options).await?)?
        }
        Command::User { username, include } => {
            serde_json::to_value(fetch_user(&username, &include, store, options).await?)?
        }
        Command::Project { id } => serde_json::to_value(fetch_project(&id, store, options).await?)?,
        Command::Initiative { id } => {
            serde_json::to_value(fetch_initiative(&id, store, options).await?)?
        }
        Command::Site { id } => serde_json::to_value(fetch_site(&id, store, options).await?)?,
        Command::Page { id } => serde_json::to_value(fetch_page(&id, store, options).await?)?,
        Command::Status { url, timeout_ms } => {
            let timeout = timeout_ms.map_or_else(|| config.status_timeout(), Duration::from_millis);
            serde_json::to_value(check_service_status(store, &url, timeout, options).await)?
        }
    };
    Ok(value)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // The config file is optional; a missing one yields defaults.
    let config = match args.config.clone().or_else(default_config_path) {
        Some(path) => load_config(&path).await?,
        None => SdkConfig::default(),
    };

    init_logging(LogConfig {
        log_dir: args.log_dir,
        log_level: parse_level(&config.log_level),
        json_format: args.log_json || config.log_json,
        rotation: parse_rotation(&args.log_rotation),
    })?;

    let mut options = config.request_options();
    if let Some(portal) = args.portal {
        options.portal = portal;
    }

    let store = match &args.snapshot {
        Some(path) => {
            info!(snapshot = %path.display(), "Loading store snapshot");
            load_snapshot(path).await?
        }
        None => MemoryStore::default(),
    };

    debug!(command = ?args.command, "Running command");
    let output = run(args.command, &store, &options, &config).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
