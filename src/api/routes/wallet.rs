//! Wallet Routes
//!
//! - GET /wallet/:address - Wallet activity summary

use axum::{extract::Path, Json};

use super::validate_address;
use crate::api::dto::WalletResponse;
use crate::api::error::ApiResult;

/// GET /wallet/:address
pub async fn get_wallet(Path(address): Path<String>) -> ApiResult<Json<WalletResponse>> {
    validate_address("Wallet", &address)?;

    tracing::debug!(address = %address, "Serving wallet data");

    Ok(Json(WalletResponse {
        address,
        account_info: None,
        transactions: 10,
        tokens_held: vec!["Token1".to_string(), "Token2".to_string()],
    }))
}
