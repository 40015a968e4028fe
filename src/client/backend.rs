//! Analysis Backend Client
//!
//! HTTP client for the analysis backend's read endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::config::BackendConfig;
use crate::dashboard::{
    DataSource, FetchError, FetchResult, NftData, Prediction, SentimentScore, TokenData,
    WalletData,
};

/// Analysis backend REST client
pub struct BackendClient {
    client: Client,
    config: BackendConfig,
}

impl BackendClient {
    /// Create a new client with the given configuration
    pub fn new(config: BackendConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Build an endpoint URL; path segments are percent-encoded
    pub fn url(&self, segments: &[&str]) -> String {
        let mut url = self.config.base_url.trim_end_matches('/').to_string();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    /// GET a URL and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl DataSource for BackendClient {
    async fn token(&self, address: &str) -> FetchResult<TokenData> {
        self.get_json(&self.url(&["token", address])).await
    }

    async fn prediction(&self) -> FetchResult<Prediction> {
        let body: PredictionResponse = self.get_json(&self.url(&["predict", "arima"])).await?;
        Ok(body.prediction)
    }

    async fn wallet(&self, address: &str) -> FetchResult<WalletData> {
        self.get_json(&self.url(&["wallet", address])).await
    }

    async fn sentiment(&self, query: &str) -> FetchResult<SentimentScore> {
        let body: SentimentResponse = self.get_json(&self.url(&["sentiment", query])).await?;
        Ok(SentimentScore(body.average_sentiment))
    }

    async fn nft(&self, address: &str) -> FetchResult<NftData> {
        self.get_json(&self.url(&["nft", address])).await
    }
}

// ============================================
// Response DTOs
// ============================================

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    prediction: Prediction,
}

#[derive(Debug, Deserialize)]
struct SentimentResponse {
    average_sentiment: f64,
}
