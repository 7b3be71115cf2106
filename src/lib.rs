//! Browser client for the Marketfront marketplace: session tracking, login,
//! registration, and role-gated routing backed by the site's user directory.
//!
//! The user directory is the source of truth; this client keeps an in-memory
//! snapshot of it plus one persisted session id, and everything auth-related
//! is answered from those two.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
