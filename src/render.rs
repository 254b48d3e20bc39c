//! Rendering: clears the surface and strokes every block in list order.
//!
//! The renderer keeps no state between calls. It reads the block list, coerces
//! each block's text fields to numbers, and emits one stroked path per block.
//! Nothing is ever filled.
//!
//! Bad numbers never stop a repaint: they coerce to degenerate geometry. A
//! block the surface rejects outright is logged and skipped, and the blocks
//! after it still paint.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use crate::blocks::{BlockList, Geometry, ShapeBlock, ShapeType};
use crate::surface::Surface;

/// Repaint the full scene: clear `width`×`height`, then stroke each block bottom-first.
pub fn draw<S: Surface>(surface: &S, blocks: &BlockList, width: f64, height: f64) {
    surface.clear(width, height);

    for block in blocks {
        if let Err(err) = draw_block(surface, block) {
            log::warn!("block {} ({}) not drawn: {err:?}", block.id, block.shape.as_str());
        }
    }
}

// =============================================================
// Block dispatch
// =============================================================

fn draw_block<S: Surface>(surface: &S, block: &ShapeBlock) -> Result<(), S::Error> {
    let g = block.geometry();

    surface.set_stroke_color(&block.color);
    surface.set_line_width(g.thickness);
    surface.begin_path();

    match block.shape {
        ShapeType::Line => trace_line(surface, &g),
        ShapeType::Rect => surface.rect(g.x1, g.y1, g.x2, g.y2),
        ShapeType::Square => surface.rect(g.x1, g.y1, g.x2, g.x2),
        ShapeType::Circle => surface.arc(g.x1, g.y1, g.x2, 0.0, TAU)?,
        ShapeType::Polygon => trace_polygon(surface, &g),
    }

    surface.stroke();
    Ok(())
}

// =============================================================
// Paths
// =============================================================

fn trace_line<S: Surface>(surface: &S, g: &Geometry) {
    surface.move_to(g.x1, g.y1);
    surface.line_to(g.x2, g.y2);
}

/// Regular polygon with circumradius `x2`, vertex 0 at angle 0.
///
/// Emits `sides + 1` points so the last segment returns to vertex 0 without a
/// separate close.
fn trace_polygon<S: Surface>(surface: &S, g: &Geometry) {
    let n = f64::from(g.sides);
    for i in 0..=g.sides {
        let angle = f64::from(i) / n * TAU;
        let px = g.x2.mul_add(angle.cos(), g.x1);
        let py = g.x2.mul_add(angle.sin(), g.y1);
        if i == 0 {
            surface.move_to(px, py);
        } else {
            surface.line_to(px, py);
        }
    }
}
