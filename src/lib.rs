//! # institute-client
//!
//! Leptos + WASM frontend for the institute-management web application.
//! Replaces the Angular + Material `client/` with a Rust-native UI layer.
//!
//! This crate contains pages (marketing site, dashboard, student roster),
//! shared components (navigation shell, snackbar host), application state,
//! and the REST helpers used to read the backend collections. The backend
//! itself is an external collaborator reached only over HTTP.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Entry point for the browser (hydrate) build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
