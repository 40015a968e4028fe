//! Wallet Provider
//!
//! Connection context for the wallet adapter: which network endpoint it binds
//! to, which adapters are offered, and whether it reconnects on load. The
//! adapter's own session handling lives in the browser extension.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use super::rpc::Connection;
use crate::config::WalletConfig;

/// Solana cluster the wallet connects to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalletNetwork {
    #[default]
    Mainnet,
    Devnet,
    Testnet,
}

impl WalletNetwork {
    /// Public RPC endpoint for the cluster
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            WalletNetwork::Mainnet => "https://api.mainnet-beta.solana.com",
            WalletNetwork::Devnet => "https://api.devnet.solana.com",
            WalletNetwork::Testnet => "https://api.testnet.solana.com",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WalletNetwork::Mainnet => "mainnet-beta",
            WalletNetwork::Devnet => "devnet",
            WalletNetwork::Testnet => "testnet",
        }
    }
}

impl FromStr for WalletNetwork {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(WalletNetwork::Mainnet),
            "devnet" => Ok(WalletNetwork::Devnet),
            "testnet" => Ok(WalletNetwork::Testnet),
            other => Err(WalletError::UnknownNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for WalletNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported browser wallet adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletAdapterKind {
    Phantom,
}

impl WalletAdapterKind {
    pub fn name(&self) -> &'static str {
        match self {
            WalletAdapterKind::Phantom => "Phantom",
        }
    }
}

impl FromStr for WalletAdapterKind {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "phantom" => Ok(WalletAdapterKind::Phantom),
            other => Err(WalletError::UnsupportedAdapter(other.to_string())),
        }
    }
}

/// Wallet connection context wrapping the page
#[derive(Debug, Clone)]
pub struct WalletProvider {
    network: WalletNetwork,
    endpoint: reqwest::Url,
    adapters: Vec<WalletAdapterKind>,
    auto_connect: bool,
    rpc_timeout: Duration,
}

impl WalletProvider {
    /// Validate the wallet configuration and bind the connection context
    pub fn new(config: &WalletConfig) -> Result<Self, WalletError> {
        let network: WalletNetwork = config.network.parse()?;

        let raw_endpoint = config
            .endpoint
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| network.default_endpoint());
        let endpoint = reqwest::Url::parse(raw_endpoint.trim())
            .map_err(|e| WalletError::InvalidEndpoint(format!("{}: {}", raw_endpoint, e)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(WalletError::InvalidEndpoint(format!(
                "{}: unsupported scheme {}",
                raw_endpoint,
                endpoint.scheme()
            )));
        }

        let mut adapters = Vec::new();
        for name in &config.adapters {
            let adapter: WalletAdapterKind = name.parse()?;
            if !adapters.contains(&adapter) {
                adapters.push(adapter);
            }
        }
        if adapters.is_empty() {
            return Err(WalletError::NoAdapters);
        }

        Ok(Self {
            network,
            endpoint,
            adapters,
            auto_connect: config.auto_connect,
            rpc_timeout: Duration::from_millis(config.rpc_timeout_ms),
        })
    }

    pub fn network(&self) -> WalletNetwork {
        self.network
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub fn adapters(&self) -> &[WalletAdapterKind] {
        &self.adapters
    }

    pub fn auto_connect(&self) -> bool {
        self.auto_connect
    }

    /// RPC connection bound to the provider's endpoint
    pub fn connection(&self) -> Result<Connection, WalletError> {
        Connection::new(self.endpoint.clone(), self.rpc_timeout)
    }

    /// One-line summary for the page header
    pub fn describe(&self) -> String {
        let adapters: Vec<&str> = self.adapters.iter().map(|a| a.name()).collect();
        format!(
            "Wallet: {} on {} ({}){}",
            adapters.join(", "),
            self.network,
            self.endpoint,
            if self.auto_connect { ", auto-connect" } else { "" }
        )
    }
}

/// Wallet context errors
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Unsupported wallet adapter: {0}")]
    UnsupportedAdapter(String),

    #[error("No wallet adapters configured")]
    NoAdapters,

    #[error("Invalid RPC endpoint {0}")]
    InvalidEndpoint(String),

    #[error("RPC request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Unexpected RPC response: {0}")]
    UnexpectedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider() {
        let provider = WalletProvider::new(&WalletConfig::default()).unwrap();
        assert_eq!(provider.network(), WalletNetwork::Mainnet);
        assert_eq!(provider.endpoint(), "https://api.mainnet-beta.solana.com/");
        assert_eq!(provider.adapters(), &[WalletAdapterKind::Phantom]);
        assert!(provider.auto_connect());
        assert_eq!(
            provider.describe(),
            "Wallet: Phantom on mainnet-beta (https://api.mainnet-beta.solana.com/), auto-connect"
        );
    }

    #[test]
    fn test_network_parsing() {
        assert_eq!("Devnet".parse::<WalletNetwork>().unwrap(), WalletNetwork::Devnet);
        assert_eq!("mainnet".parse::<WalletNetwork>().unwrap(), WalletNetwork::Mainnet);
        assert!(matches!(
            "localnet".parse::<WalletNetwork>(),
            Err(WalletError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_endpoint_override() {
        let config = WalletConfig {
            network: "devnet".to_string(),
            endpoint: Some("http://127.0.0.1:8899".to_string()),
            auto_connect: false,
            ..Default::default()
        };
        let provider = WalletProvider::new(&config).unwrap();
        assert_eq!(provider.network(), WalletNetwork::Devnet);
        assert_eq!(provider.endpoint(), "http://127.0.0.1:8899/");
        assert!(!provider.describe().contains("auto-connect"));
    }

    #[test]
    fn test_invalid_configs() {
        let config = WalletConfig {
            endpoint: Some("ws://api.mainnet-beta.solana.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            WalletProvider::new(&config),
            Err(WalletError::InvalidEndpoint(_))
        ));

        let config = WalletConfig {
            adapters: vec![],
            ..Default::default()
        };
        assert!(matches!(WalletProvider::new(&config), Err(WalletError::NoAdapters)));

        let config = WalletConfig {
            adapters: vec!["solflare".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            WalletProvider::new(&config),
            Err(WalletError::UnsupportedAdapter(_))
        ));
    }

    #[test]
    fn test_duplicate_adapters_collapse() {
        let config = WalletConfig {
            adapters: vec!["phantom".to_string(), "Phantom".to_string()],
            ..Default::default()
        };
        let provider = WalletProvider::new(&config).unwrap();
        assert_eq!(provider.adapters().len(), 1);
    }
}
