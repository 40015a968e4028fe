//! HTTP API Client
//!
//! Functions for the five analysis backend endpoints. Every call is a plain
//! GET; a non-2xx status or an unexpected body is reported as an error string.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::state::global::Prediction;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Default sentiment search query
pub const DEFAULT_SENTIMENT_QUERY: &str = "Solana";

const API_URL_KEY: &str = "cryptolens_api_url";
const TOKEN_ADDRESS_KEY: &str = "cryptolens_token_address";
const WALLET_ADDRESS_KEY: &str = "cryptolens_wallet_address";
const NFT_ADDRESS_KEY: &str = "cryptolens_nft_address";
const SENTIMENT_QUERY_KEY: &str = "cryptolens_sentiment_query";

/// What the dashboard asks the backend about
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Targets {
    pub token_address: Option<String>,
    pub wallet_address: Option<String>,
    pub nft_address: Option<String>,
    pub sentiment_query: String,
}

impl Targets {
    /// Load targets from local storage; blank entries count as unset
    pub fn load() -> Self {
        Self {
            token_address: non_blank(read_setting(TOKEN_ADDRESS_KEY)),
            wallet_address: non_blank(read_setting(WALLET_ADDRESS_KEY)),
            nft_address: non_blank(read_setting(NFT_ADDRESS_KEY)),
            sentiment_query: non_blank(read_setting(SENTIMENT_QUERY_KEY))
                .unwrap_or_else(|| DEFAULT_SENTIMENT_QUERY.to_string()),
        }
    }

    /// Persist targets to local storage
    pub fn save(&self) {
        write_setting(TOKEN_ADDRESS_KEY, self.token_address.as_deref().unwrap_or(""));
        write_setting(WALLET_ADDRESS_KEY, self.wallet_address.as_deref().unwrap_or(""));
        write_setting(NFT_ADDRESS_KEY, self.nft_address.as_deref().unwrap_or(""));
        write_setting(SENTIMENT_QUERY_KEY, &self.sentiment_query);
    }
}

/// Trim a setting and drop it when empty
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn read_setting(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

fn write_setting(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = non_blank(read_setting(API_URL_KEY)).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    write_setting(API_URL_KEY, url);
}

/// Build an endpoint URL, percent-encoding each path segment
pub fn endpoint(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(&String::from(js_sys::encode_uri_component(segment)));
    }
    url
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct PredictionResponse {
    prediction: Prediction,
}

#[derive(Debug, serde::Deserialize)]
struct SentimentResponse {
    average_sentiment: f64,
}

// ============ API Functions ============

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("HTTP {}: {}", status, body.trim()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch token data
pub async fn fetch_token(address: &str) -> Result<serde_json::Value, String> {
    get_json(&endpoint(&get_api_base(), &["token", address])).await
}

/// Fetch the next-step price prediction
pub async fn fetch_prediction() -> Result<Prediction, String> {
    let response: PredictionResponse =
        get_json(&endpoint(&get_api_base(), &["predict", "arima"])).await?;
    Ok(response.prediction)
}

/// Fetch wallet data
pub async fn fetch_wallet(address: &str) -> Result<serde_json::Value, String> {
    get_json(&endpoint(&get_api_base(), &["wallet", address])).await
}

/// Fetch the average sentiment for a query
pub async fn fetch_sentiment(query: &str) -> Result<f64, String> {
    let response: SentimentResponse =
        get_json(&endpoint(&get_api_base(), &["sentiment", query])).await?;
    Ok(response.average_sentiment)
}

/// Fetch NFT metadata
pub async fn fetch_nft(address: &str) -> Result<serde_json::Value, String> {
    get_json(&endpoint(&get_api_base(), &["nft", address])).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(Some(" abc ".to_string())), Some("abc".to_string()));
    }

    #[test]
    fn test_response_shapes() {
        let prediction: PredictionResponse =
            serde_json::from_str(r#"{"prediction": 101.5}"#).unwrap();
        assert_eq!(prediction.prediction, Prediction::Number(101.5));

        let sentiment: SentimentResponse =
            serde_json::from_str(r#"{"average_sentiment": 0.42}"#).unwrap();
        assert_eq!(sentiment.average_sentiment, 0.42);

        assert!(serde_json::from_str::<SentimentResponse>(r#"{"score": 1}"#).is_err());
    }
}
