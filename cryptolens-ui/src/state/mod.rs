//! State Management
//!
//! Dashboard slots and the error list, held in Leptos signals.

pub mod global;

pub use global::{provide_dashboard_state, DashboardState};
