//! Catalog Validation API (v1)
//!
//! A small HTTP API built with Tokio and Axum that demonstrates request
//! validation: query parameters, path parameters, typed JSON bodies,
//! nested models, and body-embedding conventions.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                 CATALOG API                  │
//!                      │                                              │
//!     Client Request   │  ┌─────────┐    ┌──────────┐    ┌─────────┐ │
//!     ─────────────────┼─▶│  http   │───▶│ extract  │───▶│ handler │ │
//!                      │  │ server  │    │+ validate│    │  (pure) │ │
//!                      │  └─────────┘    └──────────┘    └────┬────┘ │
//!                      │                                      │      │
//!                      │                                      ▼      │
//!     Client Response  │  ┌─────────┐                   ┌─────────┐  │
//!     ◀────────────────┼──│  JSON   │◀──────────────────│ catalog │  │
//!                      │  │response │                   │  store  │  │
//!                      │  └─────────┘                   └─────────┘  │
//!                      │                                              │
//!                      │  ┌────────────────────────────────────────┐ │
//!                      │  │         Cross-Cutting Concerns          │ │
//!                      │  │  ┌────────┐ ┌─────────┐ ┌────────────┐ │ │
//!                      │  │  │ config │ │ tracing │ │ request-id │ │ │
//!                      │  │  └────────┘ └─────────┘ └────────────┘ │ │
//!                      │  └────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_api::config::{load_config, ServerConfig};
use catalog_api::http::HttpServer;

#[derive(Parser)]
#[command(name = "catalog-api")]
#[command(about = "HTTP API demonstrating request validation", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("catalog-api v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
