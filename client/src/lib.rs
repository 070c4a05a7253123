//! # client
//!
//! Leptos + WASM front end for lung-tumor staging intake.
//!
//! Five route-level pages (report entry, response review, staging form,
//! report search, benign outcome) share state through browser local storage
//! via the typed `records::ClientStore`. Webhook calls run in the browser
//! under the `hydrate` feature; server-side rendering never performs I/O.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
