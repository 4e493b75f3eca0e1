//! Leptos front end for the Edit Job page.

pub mod app;
pub mod session;

use wasm_bindgen::prelude::*;

/// WASM entry point, run when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
