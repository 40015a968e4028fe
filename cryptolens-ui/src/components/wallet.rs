//! Wallet Connection Context
//!
//! Provides the Solana network endpoint, the wallet adapters on offer and the
//! auto-connect flag to everything rendered inside it. Signing and account
//! access stay with the wallet extension itself.

use leptos::wasm_bindgen::JsValue;
use leptos::*;

/// Solana mainnet-beta RPC endpoint
pub const MAINNET_ENDPOINT: &str = "https://api.mainnet-beta.solana.com";

/// Wallet adapters the page offers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalletAdapter {
    Phantom,
}

impl WalletAdapter {
    pub fn name(&self) -> &'static str {
        match self {
            WalletAdapter::Phantom => "Phantom",
        }
    }

    /// Global the browser extension injects into `window`
    fn injected_global(&self) -> &'static str {
        match self {
            WalletAdapter::Phantom => "phantom",
        }
    }

    /// Whether the extension is installed in this browser
    pub fn is_installed(&self) -> bool {
        web_sys::window()
            .and_then(|window| {
                js_sys::Reflect::has(&window, &JsValue::from_str(self.injected_global())).ok()
            })
            .unwrap_or(false)
    }
}

/// Wallet context shared with descendant components
#[derive(Clone, Debug)]
pub struct WalletContext {
    pub network: &'static str,
    pub endpoint: String,
    pub adapters: Vec<WalletAdapter>,
    pub auto_connect: bool,
}

impl WalletContext {
    pub fn describe(&self) -> String {
        let names: Vec<&str> = self.adapters.iter().map(WalletAdapter::name).collect();
        format!(
            "Wallet: {} on {} ({}){}",
            names.join(", "),
            self.network,
            self.endpoint,
            if self.auto_connect { ", auto-connect" } else { "" }
        )
    }
}

/// Wraps its children in the wallet connection context
#[component]
pub fn WalletProvider(
    #[prop(default = MAINNET_ENDPOINT.to_string(), into)]
    endpoint: String,
    #[prop(default = true)]
    auto_connect: bool,
    children: Children,
) -> impl IntoView {
    let context = WalletContext {
        network: "mainnet-beta",
        endpoint,
        adapters: vec![WalletAdapter::Phantom],
        auto_connect,
    };
    logging::log!("{}", context.describe());
    provide_context(context);

    children()
}

/// Shows the active wallet context and whether each adapter is installed
#[component]
pub fn WalletStatus() -> impl IntoView {
    let context = use_context::<WalletContext>().expect("WalletContext not found");

    view! {
        <div class="text-sm text-gray-400 flex flex-wrap items-center gap-3">
            <span>{context.describe()}</span>
            {context.adapters.iter().map(|adapter| {
                let (label, class) = if adapter.is_installed() {
                    (format!("{} detected", adapter.name()), "text-green-400")
                } else {
                    (format!("{} not installed", adapter.name()), "text-yellow-400")
                };
                view! { <span class=class>{label}</span> }
            }).collect_view()}
        </div>
    }
}
