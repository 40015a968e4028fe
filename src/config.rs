//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::dashboard::SlotKind;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub targets: TargetsConfig,

    #[serde(default)]
    pub wallet: WalletConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analysis backend the dashboard reads from
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_backend_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout() -> u64 {
    10_000
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

/// Addresses and queries the dashboard looks up
#[derive(Debug, Clone, Deserialize)]
pub struct TargetsConfig {
    pub token_address: Option<String>,

    pub wallet_address: Option<String>,

    pub nft_address: Option<String>,

    #[serde(default = "default_sentiment_query")]
    pub sentiment_query: String,
}

fn default_sentiment_query() -> String {
    "Solana".to_string()
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            token_address: None,
            wallet_address: None,
            nft_address: None,
            sentiment_query: default_sentiment_query(),
        }
    }
}

impl TargetsConfig {
    /// Path argument for a slot. Blank values count as unset.
    ///
    /// The prediction slot takes no argument and always resolves.
    pub fn target(&self, slot: SlotKind) -> Option<&str> {
        let value = match slot {
            SlotKind::Token => self.token_address.as_deref(),
            SlotKind::Wallet => self.wallet_address.as_deref(),
            SlotKind::Nft => self.nft_address.as_deref(),
            SlotKind::Sentiment => Some(self.sentiment_query.as_str()),
            SlotKind::Prediction => return Some(""),
        };
        value.map(str::trim).filter(|v| !v.is_empty())
    }
}

/// Wallet connection context
#[derive(Debug, Clone, Deserialize)]
pub struct WalletConfig {
    #[serde(default = "default_network")]
    pub network: String,

    /// RPC endpoint; defaults to the public endpoint of `network`
    pub endpoint: Option<String>,

    #[serde(default = "default_adapters")]
    pub adapters: Vec<String>,

    #[serde(default = "default_auto_connect")]
    pub auto_connect: bool,

    #[serde(default = "default_rpc_timeout")]
    pub rpc_timeout_ms: u64,
}

fn default_network() -> String {
    "mainnet-beta".to_string()
}

fn default_adapters() -> Vec<String> {
    vec!["phantom".to_string()]
}

fn default_auto_connect() -> bool {
    true
}

fn default_rpc_timeout() -> u64 {
    5000
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            endpoint: None,
            adapters: default_adapters(),
            auto_connect: default_auto_connect(),
            rpc_timeout_ms: default_rpc_timeout(),
        }
    }
}

/// Demo backend server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Price series the forecast endpoint extrapolates from
    #[serde(default = "default_price_history")]
    pub price_history: Vec<f64>,

    /// Polarity scores per sentiment query (case-insensitive keys)
    #[serde(default)]
    pub sentiment_scores: HashMap<String, Vec<f64>>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_price_history() -> Vec<f64> {
    vec![96.0, 97.5, 97.1, 98.4, 99.0, 98.7, 99.6, 100.0]
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            price_history: default_price_history(),
            sentiment_scores: HashMap::new(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Result of searching the default config locations
#[derive(Debug)]
pub struct DefaultLoad {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that exist but failed to load
    pub errors: Vec<ConfigError>,
}

impl DefaultLoad {
    /// Report where the config came from and which files were skipped
    pub fn log(&self) {
        for e in &self.errors {
            tracing::warn!("Failed to load config: {}", e);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Nothing is logged here; call [`DefaultLoad::log`] once tracing is up.
    pub fn load_default() -> DefaultLoad {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("cryptolens").join("config.toml")),
            Some(PathBuf::from("/etc/cryptolens/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing file that parses, falling back to defaults
    pub(crate) fn load_first(paths: &[PathBuf]) -> DefaultLoad {
        let mut errors = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return DefaultLoad {
                        config,
                        source: Some(path.clone()),
                        errors,
                    }
                }
                Err(e) => errors.push(e),
            }
        }

        DefaultLoad {
            config: Self::from_env(),
            source: None,
            errors,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (environment in production)
    pub(crate) fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Backend
        if let Some(url) = lookup("CRYPTOLENS_BACKEND_URL") {
            self.backend.base_url = url;
        }

        // Targets
        if let Some(addr) = lookup("CRYPTOLENS_TOKEN_ADDRESS") {
            self.targets.token_address = Some(addr);
        }
        if let Some(addr) = lookup("CRYPTOLENS_WALLET_ADDRESS") {
            self.targets.wallet_address = Some(addr);
        }
        if let Some(addr) = lookup("CRYPTOLENS_NFT_ADDRESS") {
            self.targets.nft_address = Some(addr);
        }
        if let Some(query) = lookup("CRYPTOLENS_SENTIMENT_QUERY") {
            self.targets.sentiment_query = query;
        }

        // Wallet
        if let Some(endpoint) = lookup("CRYPTOLENS_RPC_ENDPOINT") {
            self.wallet.endpoint = Some(endpoint);
        }

        // Demo backend
        if let Some(host) = lookup("CRYPTOLENS_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("CRYPTOLENS_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging
        if let Some(level) = lookup("CRYPTOLENS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CRYPTOLENS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# CryptoLens Configuration
#
# Environment variables override these settings:
# - CRYPTOLENS_BACKEND_URL
# - CRYPTOLENS_TOKEN_ADDRESS
# - CRYPTOLENS_WALLET_ADDRESS
# - CRYPTOLENS_NFT_ADDRESS
# - CRYPTOLENS_SENTIMENT_QUERY
# - CRYPTOLENS_RPC_ENDPOINT
# - CRYPTOLENS_API_HOST
# - CRYPTOLENS_API_PORT
# - CRYPTOLENS_LOG_LEVEL
# - CRYPTOLENS_LOG_FORMAT

[backend]
# Analysis backend URL
base_url = "http://localhost:5000"

# Per-request timeout in milliseconds
request_timeout_ms = 10000

[targets]
# Addresses to look up. A slot whose address is unset is skipped.
# token_address = "So11111111111111111111111111111111111111112"
# wallet_address = ""
# nft_address = ""

# Search query for sentiment analysis
sentiment_query = "Solana"

[wallet]
# Network: mainnet-beta, devnet, testnet
network = "mainnet-beta"

# RPC endpoint (default: public endpoint of the network)
# endpoint = "https://api.mainnet-beta.solana.com"

# Supported wallet adapters
adapters = ["phantom"]

# Reconnect to the last used wallet on load
auto_connect = true

# RPC probe timeout in milliseconds
rpc_timeout_ms = 5000

[api]
# Demo backend host
host = "0.0.0.0"

# Demo backend port
port = 5000

# Price series used by /predict/arima
price_history = [96.0, 97.5, 97.1, 98.4, 99.0, 98.7, 99.6, 100.0]

# Polarity scores served by /sentiment/<query>
[api.sentiment_scores]
solana = [0.42]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
