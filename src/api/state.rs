//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::config::ApiConfig;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// API configuration (including served fixtures)
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time for health reports
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Polarity scores configured for a query (case-insensitive)
    pub fn sentiment_scores(&self, query: &str) -> &[f64] {
        let query = query.to_lowercase();
        self.config
            .sentiment_scores
            .iter()
            .find(|(key, _)| key.to_lowercase() == query)
            .map(|(_, scores)| scores.as_slice())
            .unwrap_or(&[])
    }
}
