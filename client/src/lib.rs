//! # client
//!
//! Leptos + WASM frontend for the Project Parliament chart-review
//! application. A human uploads chart images, four AI participants discuss
//! them over the realtime push channel, and the finished report is offered
//! for download.
//!
//! This crate contains pages, components, application state, network types,
//! the push-channel client, and the session controller that bridges REST
//! action results to state transitions.

pub mod app;
pub mod components;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
