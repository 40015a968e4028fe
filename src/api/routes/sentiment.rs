//! Sentiment Routes
//!
//! - GET /sentiment/:query - Average polarity for a search query

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::SentimentResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /sentiment/:query
///
/// Averages the configured polarity scores for the query. A query with no
/// scores averages to 0.
pub async fn get_sentiment(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
) -> ApiResult<Json<SentimentResponse>> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ApiError::Validation("Query must not be empty".to_string()));
    }

    let scores = state.sentiment_scores(query);
    let average_sentiment = average(scores);

    tracing::debug!(query = %query, samples = scores.len(), average_sentiment, "Serving sentiment");

    Ok(Json(SentimentResponse { average_sentiment }))
}

/// Mean of the scores, 0 when empty
pub fn average(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}
