//! UI components for the block editor.

pub mod block_card;
pub mod block_panel;
pub mod canvas_host;
