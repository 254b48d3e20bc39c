//! Helpers shared across client components.
//!
//! `dom` holds everything that touches the browser; the rest are pure and
//! covered by native tests.

pub mod block_view;
pub mod config;
pub mod dom;
