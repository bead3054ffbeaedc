//! # auth-client
//!
//! Leptos + WASM frontend for a session-cookie-authenticated accounts
//! service. Replaces the React `Frontend/` with a Rust-native UI layer.
//!
//! The crate is the client half only: the identity endpoints
//! (`/api/user`, `/api/login`, `/api/register`, `/api/logout`) are an
//! external collaborator. Everything session-related flows through
//! `net::api` (tagged results), `state::auth` (one shared store), and
//! the per-page form machines in `state::forms`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
