//! Presentation mapping for block cards and the coordinate readout.

#[cfg(test)]
#[path = "block_view_test.rs"]
mod block_view_test;

use blockdraw::blocks::{Axis, Field};
use blockdraw::input::CoordReadout;

/// CSS classes for a field input. Coordinate inputs carry their axis tag.
pub fn field_class(field: Field) -> &'static str {
    match (field, field.axis()) {
        (Field::Color, _) => "block-card__color",
        (Field::Thickness, _) => "block-card__input block-card__thickness",
        (_, Some(Axis::X)) => "block-card__input block-card__input--x",
        (_, Some(Axis::Y)) => "block-card__input block-card__input--y",
        (_, None) => "block-card__input",
    }
}

/// HTML `type` attribute for a field input.
pub fn input_type(field: Field) -> &'static str {
    match field {
        Field::Color => "color",
        Field::Thickness => "number",
        _ => "text",
    }
}

/// CSS `display` value for a field that may be hidden for the current shape.
pub fn display_style(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

/// Inline style placing the readout next to the pointer.
pub fn readout_style(readout: &CoordReadout) -> String {
    format!("left: {:.0}px; top: {:.0}px;", readout.left, readout.top)
}
