//! Localcoin Dashboard
//!
//! Cryptocurrency prices and ATM locator built with Leptos (WASM).
//!
//! # Features
//!
//! - Live top-10 coin prices, refreshed every 30 seconds
//! - Search by name or symbol, sort by name, price or 24h change
//! - ATM locator with online-only filter and embedded map
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the CoinGecko API directly and shares its models,
//! search/sort and map focus logic with the `localcoin` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
