//! # scrapforge
//!
//! Browser SPA that turns a logged waste-material inventory into
//! AI-generated upcycling project suggestions and fabrication plans, with a
//! streaming workshop assistant on a second tab.
//!
//! This crate contains the application state, the Gemini gateway (text,
//! image, and streaming chat calls), the translation table, and the Leptos
//! component tree. Everything is in-memory; a reload starts over.

pub mod app;
pub mod components;
pub mod config;
pub mod gateway;
pub mod i18n;
pub mod state;

use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: set up logging and mount the app.
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
