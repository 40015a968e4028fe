//! Backend API
//!
//! HTTP calls to the analysis backend and the browser-side settings they use.

pub mod client;

pub use client::*;
