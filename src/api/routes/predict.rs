//! Prediction Routes
//!
//! - GET /predict/arima - One-step price forecast

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::PredictionResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /predict/arima
///
/// Forecasts the next value of the configured price history.
pub async fn predict_arima(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PredictionResponse>> {
    let history = &state.config.price_history;

    let prediction = forecast_next(history).ok_or_else(|| {
        ApiError::Validation(format!(
            "Price history needs at least 2 finite points, got {}",
            history.len()
        ))
    })?;

    tracing::debug!(points = history.len(), prediction, "Serving forecast");

    Ok(Json(PredictionResponse { prediction }))
}

/// ARIMA(0,1,0) with drift: the last value plus the mean first difference.
///
/// Returns `None` for fewer than two points or any non-finite value.
pub fn forecast_next(history: &[f64]) -> Option<f64> {
    if history.len() < 2 || history.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let first = history[0];
    let last = history[history.len() - 1];
    let drift = (last - first) / (history.len() - 1) as f64;

    Some(last + drift)
}
