//! App Root Component
//!
//! Root component with the wallet and dashboard state providers.

use leptos::*;

use crate::components::{InlineLoading, Toast, WalletProvider, WalletStatus};
use crate::pages::Dashboard;
use crate::state::{provide_dashboard_state, DashboardState};

/// Page title
pub const TITLE: &str = "Crypto Analysis App";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_dashboard_state();

    view! {
        <WalletProvider>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <main class="flex-1 container mx-auto px-4 py-8 pb-24 space-y-6">
                    <header>
                        <h1 class="text-3xl font-bold">{TITLE}</h1>
                        <WalletStatus />
                    </header>

                    <Dashboard />
                </main>

                // Footer with load status
                <Footer />

                // Failed slots
                <Toast />
            </div>
        </WalletProvider>
    }
}

/// Footer component showing load progress
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    {move || {
                        state.loaded_at.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Loaded: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not loaded".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    let pending = state.pending_count();
                    if pending > 0 {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <InlineLoading />
                                <span>{format!("Loading {} of 5...", pending)}</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
