//! Shared numeric and style constants for the editor crate.

// ── Surface ─────────────────────────────────────────────────────

/// Default drawing surface width in CSS pixels.
pub const DEFAULT_SURFACE_WIDTH: u32 = 800;

/// Default drawing surface height in CSS pixels.
pub const DEFAULT_SURFACE_HEIGHT: u32 = 600;

// ── Stroke ──────────────────────────────────────────────────────

/// Stroke color for new blocks. Matches the initial value of `<input type="color">`.
pub const DEFAULT_STROKE_COLOR: &str = "#000000";

/// Line width used when the thickness field is empty, zero, negative, or not a number.
pub const MIN_EFFECTIVE_THICKNESS: f64 = 1.0;

// ── Polygon ─────────────────────────────────────────────────────

/// Fewest sides a polygon is drawn with.
pub const MIN_POLYGON_SIDES: u32 = 3;

/// Upper bound on polygon sides so a stray keystroke can't stall the repaint.
pub const MAX_POLYGON_SIDES: u32 = 1024;

// ── Readout ─────────────────────────────────────────────────────

/// Offset of the coordinate readout from the pointer, in client pixels.
pub const READOUT_OFFSET_PX: f64 = 8.0;
