//! # nimbus
//!
//! Leptos + WASM shell for the Nimbus cloud deployment dashboard.
//!
//! The interesting machinery is in [`session`]: a strategy-driven session
//! store with ordered change notification, a redirect-once route guard,
//! and pluggable persistence. Pages and components render the dashboard
//! around it with platform mock data. Pure logic is kept off the browser
//! APIs so it compiles and tests on the host target with no features
//! enabled.

pub mod app;
pub mod components;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: take over the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
