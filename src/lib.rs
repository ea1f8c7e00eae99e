//! QA portfolio - a single-page portfolio site
//!
//! Server-rendered with Leptos and hydrated in the browser, with
//! scroll-driven reveals, a pinned project carousel and a custom cursor.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
