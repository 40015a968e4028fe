//! Solana JSON-RPC connection
//!
//! Minimal client for the cluster endpoint the wallet provider is bound to.
//! Only node status calls are made here; signing and account access belong
//! to the wallet adapter.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::provider::WalletError;

/// RPC connection to a cluster endpoint
pub struct Connection {
    client: Client,
    endpoint: Url,
    next_id: AtomicU64,
}

/// Node version as reported by `getVersion`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NodeVersion {
    #[serde(rename = "solana-core")]
    pub solana_core: String,
    #[serde(rename = "feature-set", default)]
    pub feature_set: Option<u64>,
}

impl Connection {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, WalletError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// `getHealth`: "ok" when the node is caught up
    pub async fn health(&self) -> Result<String, WalletError> {
        self.call("getHealth", json!([])).await
    }

    /// `getVersion`
    pub async fn version(&self) -> Result<NodeVersion, WalletError> {
        self.call("getVersion", json!([])).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, WalletError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        tracing::debug!(endpoint = %self.endpoint, method, id, "RPC call");

        let response: RpcResponse = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        parse_response(response)
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

fn parse_response<T: DeserializeOwned>(response: RpcResponse) -> Result<T, WalletError> {
    if let Some(err) = response.error {
        return Err(WalletError::Rpc {
            code: err.code,
            message: err.message,
        });
    }

    let result = response
        .result
        .ok_or_else(|| WalletError::UnexpectedResponse("missing result".to_string()))?;

    serde_json::from_value(result).map_err(|e| WalletError::UnexpectedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_health_ok() {
        let response: RpcResponse =
            serde_json::from_str(r#"{"jsonrpc":"2.0","result":"ok","id":1}"#).unwrap();
        let health: String = parse_response(response).unwrap();
        assert_eq!(health, "ok");
    }

    #[test]
    fn test_parse_rpc_error() {
        let response: RpcResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","error":{"code":-32005,"message":"Node is behind by 42 slots"},"id":1}"#,
        )
        .unwrap();
        let err = parse_response::<String>(response).unwrap_err();
        assert!(matches!(err, WalletError::Rpc { code: -32005, .. }));
    }

    #[test]
    fn test_parse_version() {
        let response: RpcResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","result":{"feature-set":2891131721,"solana-core":"1.18.22"},"id":2}"#,
        )
        .unwrap();
        let version: NodeVersion = parse_response(response).unwrap();
        assert_eq!(version.solana_core, "1.18.22");
        assert_eq!(version.feature_set, Some(2891131721));
    }

    #[test]
    fn test_missing_result() {
        let response: RpcResponse = serde_json::from_str(r#"{"jsonrpc":"2.0","id":3}"#).unwrap();
        assert!(matches!(
            parse_response::<String>(response),
            Err(WalletError::UnexpectedResponse(_))
        ));
    }
}
