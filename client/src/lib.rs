//! # client
//!
//! Leptos + WASM frontend for the Opsdesk business dashboard.
//!
//! This crate contains pages, components, application state, and the REST
//! API client. Pages under `/inventory` and `/purchases` talk to the server
//! API; the POS, projects, messages, and billing pages render local demo
//! state only.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
