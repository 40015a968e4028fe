//! Backend Client
//!
//! [`DataSource`](crate::dashboard::DataSource) implementation over HTTP.

mod backend;

pub use backend::BackendClient;
