//! Token Routes
//!
//! - GET /token/:address - Token metadata and market figures

use axum::{extract::Path, Json};

use super::validate_address;
use crate::api::dto::TokenResponse;
use crate::api::error::ApiResult;

/// GET /token/:address
///
/// Market figures are fixed demo values; the balance is not sourced.
pub async fn get_token(Path(address): Path<String>) -> ApiResult<Json<TokenResponse>> {
    validate_address("Token", &address)?;

    tracing::debug!(address = %address, "Serving token data");

    Ok(Json(TokenResponse {
        address,
        balance: None,
        price: 100.0,
        volume: 5000.0,
        market_cap: 1_000_000.0,
    }))
}
