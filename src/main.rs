//! Sleepy Server
//!
//! Answers `GET /{delay}` with `Slept {delay} s from {start} to {end}` once
//! the delay has elapsed.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ lifecycle::startup (bind)
//!                          │
//!                          ▼
//!                      http::server (axum, trace, request id)
//!                          │
//!                          ▼
//!                      routing::matcher ──── no match ───▶ 404 Not found
//!                          │
//!                          ▼
//!                      responder (log, stamp, tokio sleep, stamp)
//!                          │
//!     Client Response      ▼
//!     ◀─────────────── http::response (text/plain)
//! ```

use std::path::PathBuf;

use clap::Parser;

use sleepy_server::config::{load_config, validate_config, ConfigError, SleepyConfig};
use sleepy_server::http::HttpServer;
use sleepy_server::lifecycle::{startup, Shutdown};
use sleepy_server::observability;

#[derive(Parser, Debug)]
#[command(name = "sleepy-server", version)]
#[command(about = "HTTP server that responds after a requested delay", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Log filter, overrides `observability.log_level`.
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// Defaults, then the config file, then command-line overrides.
    fn resolve_config(&self) -> Result<SleepyConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SleepyConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    observability::init(&config.observability.log_level)?;

    tracing::info!("sleepy-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        drain_timeout_secs = config.shutdown.drain_timeout_secs,
        "Configuration loaded"
    );

    let listener = startup::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
