//! # CryptoLens
//!
//! Dashboard for a Solana analysis backend: token metadata, a price
//! forecast, wallet activity, social sentiment and NFT metadata, shown inside
//! a wallet-connection context.
//!
//! ## Modules
//!
//! - [`dashboard`]: Slot state, concurrent loader and page renderer
//! - [`client`]: HTTP client for the analysis backend
//! - [`wallet`]: Wallet provider and cluster RPC connection
//! - [`api`]: Demo backend serving the five endpoints
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cryptolens::{BackendClient, Config, Loader, RenderOptions};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default().config;
//!
//!     let client = Arc::new(BackendClient::new(config.backend.clone())?);
//!     let loader = Loader::new(client, config.targets.clone());
//!
//!     // Five independent requests; failed slots simply stay hidden
//!     let state = loader.load().await;
//!     print!("{}", cryptolens::render(&state, &RenderOptions::default()));
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod wallet;

// Re-export top-level types for convenience
pub use client::BackendClient;

pub use dashboard::{
    render, render_json, DashboardState, DataSource, FetchError, FetchResult, Loader, Mount,
    NftData, Prediction, RenderOptions, SentimentScore, Slot, SlotKind, TokenData, WalletData,
};

pub use wallet::{Connection, WalletAdapterKind, WalletError, WalletNetwork, WalletProvider};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    ApiConfig, BackendConfig, Config, ConfigError, DefaultLoad, LoggingConfig, TargetsConfig,
    WalletConfig,
};
