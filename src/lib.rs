//! # template-card
//!
//! Leptos component library for selectable template tiles: a card with an
//! optional logo, title, description, and a tag list rendered as icons,
//! badges, or plain text. Ships with a small demo application (`app`,
//! `pages`) showing the caller-owned selection contract.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered demo application.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
