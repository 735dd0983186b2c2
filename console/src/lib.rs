//! # console
//!
//! Leptos + WASM administrative console for the mock server backend.
//!
//! This crate contains pages, components, application state, REST helpers,
//! the API tester, and the browser session helper. Browser-only behavior
//! (storage, HTTP, downloads) is gated behind the `hydrate` feature so the
//! decision logic compiles and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mock console hydrating");
    leptos::mount::hydrate_body(app::App);
}
