//! Dashboard
//!
//! Loads the five dashboard slots and renders the page.
//!
//! ## Data Flow
//!
//! 1. [`Loader::mount`] starts one request per slot through a [`DataSource`]
//! 2. Each completion writes its own slot as `Ready` or `Failed`
//! 3. [`render`] turns the current [`DashboardState`] into the page, showing
//!    only ready sections

mod loader;
mod render;
mod source;
mod state;

pub use loader::{Loader, Mount};
pub use render::{render, render_json, sections, RenderOptions, Section, TITLE};
pub use source::{DataSource, FetchError, FetchResult};
pub use state::{
    DashboardState, NftData, Prediction, SentimentScore, Slot, SlotKind, TokenData, WalletData,
};
