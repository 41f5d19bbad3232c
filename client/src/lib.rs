//! # authgate-client
//!
//! Leptos + WASM single-page shell: client-side routing, a navbar driven by
//! the browser session token, a signup/login flow against the account API,
//! and a protected page that redirects anonymous visitors to `/login`.
//!
//! The same crate is compiled twice: with `hydrate` for the browser bundle and
//! with `ssr` for server rendering inside the `authgate` host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point invoked by the generated JS glue after the WASM
/// bundle loads. Hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
