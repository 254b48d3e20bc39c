//! Shape block editor engine.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but nothing
//! outside [`surface`] touches the DOM, so the whole model can be exercised by
//! native unit tests. The host UI (the `client` crate) forwards form and
//! pointer events as [`engine::Command`]s and the [`engine::Editor`] repaints
//! the canvas before control returns to the browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Command dispatch, [`engine::EditorCore`] and the surface-bound [`engine::Editor`] |
//! | [`blocks`] | Shape blocks, per-shape field semantics, the ordered [`blocks::BlockList`] |
//! | [`input`] | Coordinate picker, drag source, hover readout |
//! | [`render`] | Clear-and-repaint of the block list onto a [`surface::Surface`] |
//! | [`surface`] | Stroke-path drawing trait and its `Canvas2D` implementation |
//! | [`config`] | Editor configuration (surface size, block defaults) |
//! | [`consts`] | Shared numeric and style constants |

pub mod blocks;
pub mod config;
pub mod consts;
pub mod engine;
pub mod input;
pub mod render;
pub mod surface;
