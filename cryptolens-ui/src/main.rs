//! CryptoLens Dashboard
//!
//! Browser front end for the crypto analysis backend, built with Leptos (WASM).
//!
//! # Features
//!
//! - Token, prediction, wallet, sentiment and NFT sections, each loaded independently
//! - Sections appear only once their data has arrived
//! - Wallet connection context (Solana mainnet-beta, Phantom adapter)
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the analysis backend over plain HTTP GETs.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
