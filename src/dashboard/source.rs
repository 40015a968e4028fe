//! Data Sources
//!
//! The loader talks to the backend through [`DataSource`], so the same
//! orchestration runs against the HTTP client or an in-memory source.

use async_trait::async_trait;
use thiserror::Error;

use super::state::{NftData, Prediction, SentimentScore, SlotKind, TokenData, WalletData};

/// Provider of the five dashboard payloads
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Token metadata for a token address
    async fn token(&self, address: &str) -> FetchResult<TokenData>;

    /// Latest price forecast
    async fn prediction(&self) -> FetchResult<Prediction>;

    /// Wallet metadata for a wallet address
    async fn wallet(&self, address: &str) -> FetchResult<WalletData>;

    /// Average sentiment for a search query
    async fn sentiment(&self, query: &str) -> FetchResult<SentimentScore>;

    /// NFT metadata for a mint address
    async fn nft(&self, address: &str) -> FetchResult<NftData>;
}

/// Why a slot did not load
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// No address configured for this slot; no request was sent
    #[error("No address configured for {slot}")]
    Unconfigured { slot: SlotKind },

    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Request timeout")]
    Timeout,

    /// Backend answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Body was not valid JSON or lacked the expected field
    #[error("Malformed payload: {0}")]
    Decode(String),

    #[error("Request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Unavailable(err.to_string())
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Result type for data source calls
pub type FetchResult<T> = Result<T, FetchError>;
