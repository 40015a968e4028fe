//! CryptoLens Demo Backend
//!
//! Run with: cargo run --bin cryptolens-api
//!
//! # Configuration
//!
//! Reads the `[api]` and `[logging]` tables of the config file (see
//! `cryptolens config`). Environment variables:
//! - `CRYPTOLENS_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `CRYPTOLENS_API_PORT`: Port to listen on (default: 5000)
//! - `CRYPTOLENS_LOG_LEVEL`, `CRYPTOLENS_LOG_FORMAT`
//! - `RUST_LOG`: Overrides the log filter

use cryptolens::api::{serve, AppState};
use cryptolens::config::{Config, DefaultLoad};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = match std::env::args().nth(1) {
        Some(path) => DefaultLoad {
            config: Config::load_with_env(path.as_ref())?,
            source: Some(path.into()),
            errors: Vec::new(),
        },
        None => Config::load_default(),
    };

    cryptolens::logging::init(&loaded.config.logging, "tower_http=debug");
    loaded.log();
    let config = loaded.config;

    tracing::info!("Starting CryptoLens demo backend v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Serving {} price points, sentiment for {} queries",
        config.api.price_history.len(),
        config.api.sentiment_scores.len()
    );

    let api_config = config.api.clone();
    serve(AppState::new(config.api), &api_config).await?;

    tracing::info!("CryptoLens demo backend stopped");
    Ok(())
}
