//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod nft;
pub mod predict;
pub mod sentiment;
pub mod token;
pub mod wallet;

use axum::http::Uri;

use crate::api::error::ApiError;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Check that an address looks like a base58 public key (32-44 characters)
pub(crate) fn validate_address(kind: &str, address: &str) -> Result<(), ApiError> {
    let len = address.chars().count();
    if !(32..=44).contains(&len) {
        return Err(ApiError::Validation(format!(
            "{} address must be 32-44 characters, got {}",
            kind, len
        )));
    }

    if let Some(c) = address.chars().find(|c| !BASE58_ALPHABET.contains(*c)) {
        return Err(ApiError::Validation(format!(
            "{} address contains invalid character {:?}",
            kind, c
        )));
    }

    Ok(())
}

/// Fallback for paths no route matches
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
