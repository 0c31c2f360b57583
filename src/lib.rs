// lib.rs - Root module for the product_catalog library
//
// The catalog state machine and the data model compile without any
// features. The `ssr` and `hydrate` features add the Leptos application
// on top of them.

/// Reusable product data for tests and the mock upstream server
pub mod fixtures;

pub mod web_app;

/// WASM entry point: hydrate the server-rendered catalog in the browser
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
