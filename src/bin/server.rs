//! farecast server - fare estimation HTTP API
//!
//! Loads the trained model (if any) once at startup and serves fare
//! predictions, model info and dataset statistics over HTTP.
//!
//! # Usage
//! ```sh
//! FARECAST_MODEL_PATH=backend/models/taxi_model.json cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `FARECAST_HOST` / `FARECAST_PORT` - Listen address (default: 0.0.0.0:8000)
//! - `FARECAST_MODEL_PATH` - Model artifact (default: backend/models/taxi_model.json)
//! - `FARECAST_MODEL_META_PATH` - Model metadata (default: model_meta.json next to the artifact)
//! - `FARECAST_DATA_PATH` - Cleaned dataset CSV (default: data/cleaned_taxi.csv)

use anyhow::{Context, Result};
use clap::Parser;
use farecast::config::Config;
use farecast::interfaces::http::{self, AppState};
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Override the listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let args = Args::parse();

    info!("farecast server {} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = Config::from_env()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    info!(
        "Configuration loaded: model={:?}, metadata={:?}, dataset={:?}",
        config.model.model_path, config.model.metadata_path, config.dataset.data_path
    );

    let state = AppState::from_config(&config)?;
    let app = http::router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received. Exiting...");
    }
}
