//! Portfolio Web App (Leptos + WASM)

mod api;
mod app;
mod browser;
mod components;
mod config;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
