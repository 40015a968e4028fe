//! NFT Routes
//!
//! - GET /nft/:address - NFT metadata

use axum::{extract::Path, Json};

use super::validate_address;
use crate::api::dto::NftResponse;
use crate::api::error::ApiResult;

/// GET /nft/:address
pub async fn get_nft(Path(address): Path<String>) -> ApiResult<Json<NftResponse>> {
    validate_address("NFT", &address)?;

    Ok(Json(NftResponse {
        name: "Example NFT".to_string(),
        description: "This is an example NFT.".to_string(),
    }))
}
