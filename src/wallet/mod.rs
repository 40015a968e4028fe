//! Wallet Context
//!
//! Connection context the dashboard is wrapped in: the cluster RPC endpoint,
//! the supported wallet adapter, and the auto-connect flag.

mod provider;
mod rpc;

pub use provider::{WalletAdapterKind, WalletError, WalletNetwork, WalletProvider};
pub use rpc::{Connection, NodeVersion};
