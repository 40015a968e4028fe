//! Targets Form
//!
//! Edits the backend URL and the addresses the dashboard looks up. Values are
//! kept in local storage; saving triggers a fresh load.

use leptos::*;

use crate::api::{self, non_blank, Targets};

#[component]
pub fn TargetsForm(
    /// Called after the settings are saved
    on_save: Callback<()>,
) -> impl IntoView {
    let initial = Targets::load();
    let api_url = create_rw_signal(api::get_api_base());
    let token = create_rw_signal(initial.token_address.unwrap_or_default());
    let wallet = create_rw_signal(initial.wallet_address.unwrap_or_default());
    let nft = create_rw_signal(initial.nft_address.unwrap_or_default());
    let query = create_rw_signal(initial.sentiment_query);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        api::set_api_base(api_url.get().trim());
        Targets {
            token_address: non_blank(Some(token.get())),
            wallet_address: non_blank(Some(wallet.get())),
            nft_address: non_blank(Some(nft.get())),
            sentiment_query: non_blank(Some(query.get()))
                .unwrap_or_else(|| api::DEFAULT_SENTIMENT_QUERY.to_string()),
        }
        .save();
        on_save.call(());
    };

    view! {
        <details class="bg-gray-800 rounded-xl p-4">
            <summary class="cursor-pointer font-medium">"Settings"</summary>
            <form class="grid md:grid-cols-2 gap-4 mt-4" on:submit=submit>
                <TextField label="Backend URL" value=api_url />
                <TextField label="Sentiment query" value=query />
                <TextField label="Token address" value=token />
                <TextField label="Wallet address" value=wallet />
                <TextField label="NFT address" value=nft />
                <div class="flex items-end">
                    <button
                        type="submit"
                        class="px-6 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "Save and reload"
                    </button>
                </div>
            </form>
        </details>
    }
}

#[component]
fn TextField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="flex flex-col text-sm text-gray-400">
            {label}
            <input
                type="text"
                class="mt-1 bg-gray-700 rounded px-3 py-2 text-white"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
