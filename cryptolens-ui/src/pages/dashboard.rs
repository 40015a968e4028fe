//! Dashboard Page
//!
//! Issues the five backend requests when mounted and shows a section for each
//! one that succeeds. The requests are independent: each settles its own slot
//! in whatever order the responses arrive.

use leptos::*;
use std::future::Future;

use crate::api::{self, Targets};
use crate::components::{ready_text, JsonSection, TargetsForm, ValueSection};
use crate::state::global::{DashboardState, Slot};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    load_dashboard(state);

    let reload = Callback::new(move |_| load_dashboard(state));

    view! {
        <div class="space-y-8">
            <TargetsForm on_save=reload />

            <div class="grid md:grid-cols-2 gap-8">
                <JsonSection title="Token Data" slot=state.token />
                <ValueSection
                    title="Price Prediction"
                    label="Predicted Price"
                    value=Signal::derive(move || state.prediction.with(ready_text))
                />
                <JsonSection title="Wallet Data" slot=state.wallet />
                <ValueSection
                    title="Sentiment Analysis"
                    label="Average Sentiment"
                    value=Signal::derive(move || state.sentiment.with(ready_text))
                />
                <JsonSection title="NFT Metadata" slot=state.nft />
            </div>
        </div>
    }
}

/// Reset the slots and start one request per slot. Requests still in flight
/// from an earlier load are left to finish but can no longer write.
pub fn load_dashboard(state: DashboardState) {
    let generation = state.reset();
    let Targets {
        token_address,
        wallet_address,
        nft_address,
        sentiment_query,
    } = Targets::load();

    settle_with(
        state,
        generation,
        state.token,
        "Token Data",
        with_address(token_address, "token", |address| async move {
            api::fetch_token(&address).await
        }),
    );
    settle_with(
        state,
        generation,
        state.prediction,
        "Price Prediction",
        api::fetch_prediction(),
    );
    settle_with(
        state,
        generation,
        state.wallet,
        "Wallet Data",
        with_address(wallet_address, "wallet", |address| async move {
            api::fetch_wallet(&address).await
        }),
    );
    settle_with(
        state,
        generation,
        state.sentiment,
        "Sentiment Analysis",
        async move { api::fetch_sentiment(&sentiment_query).await },
    );
    settle_with(
        state,
        generation,
        state.nft,
        "NFT Metadata",
        with_address(nft_address, "NFT", |address| async move {
            api::fetch_nft(&address).await
        }),
    );
}

/// Request for an address-keyed slot; an unset address fails without a request
async fn with_address<F, Fut, T>(
    address: Option<String>,
    what: &'static str,
    fetch: F,
) -> Result<T, String>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<T, String>>,
{
    match address {
        Some(address) => fetch(address).await,
        None => Err(format!("No {} address configured", what)),
    }
}

fn settle_with<T, Fut>(
    state: DashboardState,
    generation: u64,
    slot: RwSignal<Slot<T>>,
    title: &'static str,
    request: Fut,
) where
    T: Clone + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    spawn_local(async move {
        let result = request.await;

        // A newer load owns the page now, or the page was unmounted
        if !state.is_current(generation) {
            return;
        }

        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Failed to fetch {}: {}", title, e).into());
            state.push_error(format!("{}: {}", title, e));
        }
        let _ = slot.try_set(Slot::from(result));
    });
}
