//! Drawing surface: the stroke-path primitives the renderer needs.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! The renderer is written against [`Surface`] so it can paint into a recording
//! double under native tests.

#[cfg(test)]
#[path = "surface_test.rs"]
pub(crate) mod surface_test;

use std::fmt::Debug;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// The browser surface the editor paints on.
pub type CanvasSurface = CanvasRenderingContext2d;

/// Stroke-path drawing capability.
///
/// Mirrors the subset of the `Canvas2D` API used for stroke-only shapes.
pub trait Surface {
    /// Error raised by fallible primitives.
    type Error: Debug;

    /// Erase the rectangle `(0, 0, width, height)`.
    fn clear(&self, width: f64, height: f64);

    /// Set the stroke color for subsequent `stroke` calls.
    fn set_stroke_color(&self, color: &str);

    /// Set the stroke width for subsequent `stroke` calls.
    fn set_line_width(&self, width: f64);

    /// Start a new, empty path.
    fn begin_path(&self);

    /// Begin a new subpath at `(x, y)`.
    fn move_to(&self, x: f64, y: f64);

    /// Add a straight segment to `(x, y)`.
    fn line_to(&self, x: f64, y: f64);

    /// Add a closed axis-aligned rectangle subpath.
    fn rect(&self, x: f64, y: f64, width: f64, height: f64);

    /// Add a circular arc from `start` to `end` radians.
    ///
    /// # Errors
    ///
    /// Fails when the surface rejects the arc (the browser rejects negative radii).
    fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), Self::Error>;

    /// Stroke the current path.
    fn stroke(&self);
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn set_stroke_color(&self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_line_width(&self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn begin_path(&self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn rect(&self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::rect(self, x, y, width, height);
    }

    fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::arc(self, x, y, radius, start, end)
    }

    fn stroke(&self) {
        CanvasRenderingContext2d::stroke(self);
    }
}

/// Error returned by [`bind_canvas`].
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// `getContext("2d")` threw.
    #[error("canvas getContext failed: {0}")]
    Context(String),
    /// The canvas has no 2D context (e.g. it already holds a WebGL context).
    #[error("canvas has no 2d context")]
    Unavailable,
    /// The returned object was not a `CanvasRenderingContext2D`.
    #[error("canvas context is not a CanvasRenderingContext2D")]
    NotCanvas2d,
}

/// Size `canvas` to `width`×`height` pixels and return its 2D context.
///
/// # Errors
///
/// Returns a [`SurfaceError`] if the 2D context can't be obtained.
pub fn bind_canvas(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<CanvasSurface, SurfaceError> {
    canvas.set_width(width);
    canvas.set_height(height);
    let context = canvas
        .get_context("2d")
        .map_err(|err| SurfaceError::Context(format!("{err:?}")))?
        .ok_or(SurfaceError::Unavailable)?;
    context
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SurfaceError::NotCanvas2d)
}
