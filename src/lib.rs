//! # portal
//!
//! Leptos + WASM frontend shell whose one non-trivial job is the session
//! authorization gate: decide on every route render whether the visitor may
//! see the route, send unauthenticated visitors to the external identity
//! provider, and stop that redirect from looping when the provider returns
//! without a session.
//!
//! Pure policy (`util::routes`, `util::auth`) and the session store
//! (`state::store`) compile and test natively; browser glue is behind the
//! `hydrate` feature.

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
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
