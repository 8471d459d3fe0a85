//! # client
//!
//! Leptos + WASM frontend for the repocheck validation service.
//!
//! This crate contains the observable state registry, the pages and
//! components that render it, the backend client, and the browser side of
//! the dev server's reload channel. Network calls and browser storage are
//! compiled in only with the `hydrate` feature; native builds keep the state
//! and view logic testable without a browser.

pub mod actions;
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount `App` into `<body>` once the module loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
