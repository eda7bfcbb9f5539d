//! SoftSell Web Frontend
//!
//! Leptos-based WASM landing page with the FAQ chat widget and contact form.

mod app;
mod chat;
mod components;
mod logging;
mod notify;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!("Mounting SoftSell landing page");
    leptos::mount::mount_to_body(App);
}
