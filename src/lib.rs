//! # admin-console
//!
//! Leptos + WASM single-page admin console for order management.
//! Replaces the React + Vite `admin-frontend/` with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, network types,
//! the identity provider client, and the two-step dashboard data fetcher.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
