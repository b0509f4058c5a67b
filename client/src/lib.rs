//! # queue-client
//!
//! Leptos + WASM frontend for the clinic queue display system: the live
//! dashboard, patient registration, per-room public displays, the operator
//! console and bulk import.
//!
//! The crate builds twice. With `hydrate` it runs in the browser and talks to
//! the queue backend over REST; with `ssr` it renders the same views on the
//! server, where every network and browser helper is an inert stub.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
