//! Interaction state: the coordinate picker, the drag source, and the hover readout.
//!
//! The picker lets the user fill a coordinate field by clicking the surface
//! instead of typing. The field that last received focus is the target; a
//! click writes the surface-relative x or y (per the field's [`Axis`]) into it.
//! None of this state is painted. It only steers how the next command mutates
//! the block list.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::blocks::{Axis, BlockId, Field};
use crate::consts::READOUT_OFFSET_PX;

/// A point in client (viewport) space, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Integer pixel position measured from the surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfacePoint {
    pub x: i64,
    pub y: i64,
}

impl SurfacePoint {
    #[must_use]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The component a field with `axis` takes.
    #[must_use]
    pub fn along(self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Client-space top-left of the drawing area inside a bordered element.
///
/// `border_box` is the bounding-rect corner, which sits on the outer border
/// edge; `border_left`/`border_top` are the element's `clientLeft`/`clientTop`.
#[must_use]
pub fn content_origin(border_box: Point, border_left: f64, border_top: f64) -> Point {
    Point { x: border_box.x + border_left, y: border_box.y + border_top }
}

/// Convert a client-space pointer position to a surface-relative pixel.
///
/// `origin` is the client-space top-left of the surface (its bounding rect).
/// Components are rounded to the nearest pixel, halves away from zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn surface_point(client: Point, origin: Point) -> SurfacePoint {
    SurfacePoint { x: (client.x - origin.x).round() as i64, y: (client.y - origin.y).round() as i64 }
}

/// The field a surface click will write into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveInput {
    pub block: BlockId,
    pub field: Field,
}

/// Floating `(x, y)` label that follows the pointer over the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordReadout {
    /// Label text, e.g. `x:120 y:80`.
    pub text: String,
    /// Client-space left edge of the label.
    pub left: f64,
    /// Client-space top edge of the label.
    pub top: f64,
}

impl CoordReadout {
    /// Readout for a pointer at `client`, hovering surface pixel `at`.
    #[must_use]
    pub fn new(client: Point, at: SurfacePoint) -> Self {
        Self {
            text: format!("x:{} y:{}", at.x, at.y),
            left: client.x + READOUT_OFFSET_PX,
            top: client.y + READOUT_OFFSET_PX,
        }
    }
}

/// A field edit produced by a surface click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedValue {
    pub block: BlockId,
    pub field: Field,
    pub value: String,
}

/// Transient interaction state owned by the editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    /// Field that currently has focus, if any.
    pub active_input: Option<ActiveInput>,
    /// Block currently being dragged, if any.
    pub dragged: Option<BlockId>,
    /// Coordinate readout while the pointer is over the surface.
    pub readout: Option<CoordReadout>,
}

impl InteractionState {
    /// Record that `field` of `block` received focus.
    pub fn focus(&mut self, block: BlockId, field: Field) {
        self.active_input = Some(ActiveInput { block, field });
    }

    /// Forget the active input if it is `field` of `block`.
    ///
    /// A late blur from a field that already lost focus to another one leaves
    /// the newer focus intact.
    pub fn blur(&mut self, block: BlockId, field: Field) {
        if self.active_input == Some(ActiveInput { block, field }) {
            self.active_input = None;
        }
    }

    /// The edit a surface click at `at` would make, if any field is a pick target.
    #[must_use]
    pub fn pick(&self, at: SurfacePoint) -> Option<PickedValue> {
        let active = self.active_input?;
        let axis = active.field.axis()?;
        Some(PickedValue { block: active.block, field: active.field, value: at.along(axis).to_string() })
    }

    /// Show the readout for a pointer at `client`.
    pub fn hover(&mut self, client: Point, at: SurfacePoint) {
        self.readout = Some(CoordReadout::new(client, at));
    }

    /// Hide the readout.
    pub fn leave(&mut self) {
        self.readout = None;
    }

    /// Start dragging `block`.
    pub fn drag_start(&mut self, block: BlockId) {
        self.dragged = Some(block);
    }

    /// Finish (or cancel) the current drag.
    pub fn drag_end(&mut self) {
        self.dragged = None;
    }

    /// Whether `block` is the current drag source.
    #[must_use]
    pub fn is_dragging(&self, block: &BlockId) -> bool {
        self.dragged.as_ref() == Some(block)
    }

    /// Drop every reference to a block that no longer exists.
    pub fn forget_block(&mut self, block: &BlockId) {
        if self.active_input.is_some_and(|a| a.block == *block) {
            self.active_input = None;
        }
        if self.dragged.as_ref() == Some(block) {
            self.dragged = None;
        }
    }
}
