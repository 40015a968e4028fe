//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod section;
pub mod targets_form;
pub mod toast;
pub mod wallet;

pub use loading::InlineLoading;
pub use section::{ready_text, JsonSection, ValueSection};
pub use targets_form::TargetsForm;
pub use toast::Toast;
pub use wallet::{WalletProvider, WalletStatus};
