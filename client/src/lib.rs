//! # client
//!
//! Leptos + WASM front end for the shape block editor.
//!
//! The left panel holds one card per shape block (shape selector, coordinate
//! and style inputs, delete button, drag handle); the right side hosts the
//! canvas. Every DOM event is mapped to a `blockdraw::engine::Command` and
//! dispatched through the shared editor, which repaints the canvas before the
//! handler returns.

pub mod app;
pub mod components;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger not installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
