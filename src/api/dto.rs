//! Data Transfer Objects
//!
//! Response types for the demo backend endpoints.
//! These types are serialized to JSON.

use serde::Serialize;
use serde_json::Value;

// ============================================
// TOKEN / WALLET / NFT DTOs
// ============================================

/// GET /token/:address response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub address: String,
    /// Token account balance (not sourced by the demo backend)
    pub balance: Option<Value>,
    pub price: f64,
    pub volume: f64,
    pub market_cap: f64,
}

/// GET /wallet/:address response
#[derive(Debug, Serialize)]
pub struct WalletResponse {
    pub address: String,
    /// Raw account info (not sourced by the demo backend)
    pub account_info: Option<Value>,
    pub transactions: u64,
    pub tokens_held: Vec<String>,
}

/// GET /nft/:address response
#[derive(Debug, Serialize)]
pub struct NftResponse {
    pub name: String,
    pub description: String,
}

// ============================================
// ANALYSIS DTOs
// ============================================

/// GET /predict/arima response
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction: f64,
}

/// GET /sentiment/:query response
#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub average_sentiment: f64,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server start time (RFC 3339)
    pub started_at: String,
    /// Crate version
    pub version: String,
}
