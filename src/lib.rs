//! # tunedrop
//!
//! Leptos + WASM single-page client for turning pasted YouTube links into
//! direct audio downloads via a third-party resolver service.
//!
//! The crate contains the page, chrome components, application state, the
//! resolver HTTP client, and browser-environment utilities (theme
//! persistence, link parsing, new-tab launch).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point; mounts the app over the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
