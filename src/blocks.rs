//! Block model: shape descriptors, per-shape field semantics, and the ordered
//! list the renderer paints from.
//!
//! Every numeric field is stored as the text the user typed. Numbers are
//! derived at paint time through the `coerce_*` helpers, so an edit never
//! rewrites what the form displays and switching shapes never loses values.
//!
//! List order is paint order: the last block is drawn on top.

#[cfg(test)]
#[path = "blocks_test.rs"]
mod blocks_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_STROKE_COLOR, MAX_POLYGON_SIDES, MIN_EFFECTIVE_THICKNESS, MIN_POLYGON_SIDES};

/// Unique identifier for a shape block.
pub type BlockId = Uuid;

/// The kind of shape a block describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    /// Segment from `(x1, y1)` to `(x2, y2)`.
    #[default]
    Line,
    /// Rectangle with top-left `(x1, y1)`, width `x2`, height `y2`.
    Rect,
    /// Square with top-left `(x1, y1)` and side `x2`.
    Square,
    /// Circle centered at `(x1, y1)` with radius `x2`.
    Circle,
    /// Regular polygon centered at `(x1, y1)`, circumradius `x2`, `y2` sides.
    Polygon,
}

impl ShapeType {
    /// All shapes in selector order.
    pub const ALL: [Self; 5] = [Self::Line, Self::Rect, Self::Square, Self::Circle, Self::Polygon];

    /// Wire name used as the `<select>` option value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Rect => "rect",
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Polygon => "polygon",
        }
    }

    /// Human-readable option label.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Rect => "Rectangle",
            Self::Square => "Square",
            Self::Circle => "Circle",
            Self::Polygon => "Polygon",
        }
    }

    /// Placeholder for the `x2` input.
    #[must_use]
    pub fn x2_label(self) -> &'static str {
        match self {
            Self::Line => "x2",
            Self::Rect => "width",
            Self::Square => "size",
            Self::Circle | Self::Polygon => "radius",
        }
    }

    /// Placeholder for the `y2` input, or `None` when the shape ignores `y2`.
    #[must_use]
    pub fn y2_label(self) -> Option<&'static str> {
        match self {
            Self::Line => Some("y2"),
            Self::Rect => Some("height"),
            Self::Polygon => Some("sides"),
            Self::Square | Self::Circle => None,
        }
    }

    /// Whether the `y2` input is shown for this shape.
    #[must_use]
    pub fn y2_visible(self) -> bool {
        self.y2_label().is_some()
    }
}

/// Error returned when parsing an unknown shape name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape type: {0:?}")]
pub struct UnknownShape(pub String);

impl FromStr for ShapeType {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| UnknownShape(s.to_owned()))
    }
}

/// Which surface axis a coordinate field takes its value from when picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// One editable field of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Shape,
    X1,
    Y1,
    X2,
    Y2,
    Color,
    Thickness,
}

impl Field {
    /// Axis a surface click writes into this field.
    ///
    /// `x1`/`x2` are x-tagged. Every other numeric input takes the y coordinate.
    /// The shape selector and the color picker are not pick targets.
    #[must_use]
    pub fn axis(self) -> Option<Axis> {
        match self {
            Self::X1 | Self::X2 => Some(Axis::X),
            Self::Y1 | Self::Y2 | Self::Thickness => Some(Axis::Y),
            Self::Shape | Self::Color => None,
        }
    }

    /// Placeholder text for this field given the block's current shape.
    #[must_use]
    pub fn placeholder(self, shape: ShapeType) -> &'static str {
        match self {
            Self::X1 => "x1",
            Self::Y1 => "y1",
            Self::X2 => shape.x2_label(),
            Self::Y2 => shape.y2_label().unwrap_or("y2"),
            Self::Thickness => "px",
            Self::Shape | Self::Color => "",
        }
    }

    /// Whether the field's control is shown for `shape`.
    #[must_use]
    pub fn is_visible(self, shape: ShapeType) -> bool {
        match self {
            Self::Y2 => shape.y2_visible(),
            _ => true,
        }
    }
}

/// Initial field values for a freshly added block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDefaults {
    /// Stroke color text.
    pub color: String,
    /// Thickness text (empty means "use the minimum").
    pub thickness: String,
}

impl Default for BlockDefaults {
    fn default() -> Self {
        Self { color: DEFAULT_STROKE_COLOR.to_owned(), thickness: String::new() }
    }
}

/// One user-configured shape descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeBlock {
    /// Stable identity; unchanged by edits and reordering.
    pub id: BlockId,
    /// Selected shape.
    pub shape: ShapeType,
    /// Reference point x, as typed.
    pub x1: String,
    /// Reference point y, as typed.
    pub y1: String,
    /// Secondary parameter (end x, width, size, or radius), as typed.
    pub x2: String,
    /// Secondary parameter (end y, height, or side count), as typed.
    pub y2: String,
    /// Stroke color as a CSS color string.
    pub color: String,
    /// Stroke width, as typed.
    pub thickness: String,
}

impl ShapeBlock {
    /// A `line` block with empty coordinates and the given style defaults.
    #[must_use]
    pub fn new(id: BlockId, defaults: &BlockDefaults) -> Self {
        Self {
            id,
            shape: ShapeType::Line,
            x1: String::new(),
            y1: String::new(),
            x2: String::new(),
            y2: String::new(),
            color: defaults.color.clone(),
            thickness: defaults.thickness.clone(),
        }
    }

    /// Current text of a field. The shape selector reports its wire name.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Shape => self.shape.as_str(),
            Field::X1 => &self.x1,
            Field::Y1 => &self.y1,
            Field::X2 => &self.x2,
            Field::Y2 => &self.y2,
            Field::Color => &self.color,
            Field::Thickness => &self.thickness,
        }
    }

    /// Replace one field. Returns `false` only for an unrecognized shape name,
    /// which leaves the block untouched.
    pub fn set_field(&mut self, field: Field, value: String) -> bool {
        let slot = match field {
            Field::Shape => {
                let Ok(shape) = value.parse::<ShapeType>() else {
                    return false;
                };
                self.shape = shape;
                return true;
            }
            Field::X1 => &mut self.x1,
            Field::Y1 => &mut self.y1,
            Field::X2 => &mut self.x2,
            Field::Y2 => &mut self.y2,
            Field::Color => &mut self.color,
            Field::Thickness => &mut self.thickness,
        };
        *slot = value;
        true
    }

    /// Numeric view of the block with every coercion applied.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        Geometry {
            x1: coerce_number(&self.x1),
            y1: coerce_number(&self.y1),
            x2: coerce_number(&self.x2),
            y2: coerce_number(&self.y2),
            thickness: coerce_thickness(&self.thickness),
            sides: coerce_sides(&self.y2),
        }
    }
}

/// Coerced numbers for one block, ready to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Stroke width, never below [`MIN_EFFECTIVE_THICKNESS`].
    pub thickness: f64,
    /// Polygon side count derived from `y2`.
    pub sides: u32,
}

/// Parse field text as a number. Blank, unparseable, and non-finite text is `0`.
#[must_use]
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Stroke width from field text; anything not strictly positive becomes the minimum.
#[must_use]
pub fn coerce_thickness(text: &str) -> f64 {
    let value = coerce_number(text);
    if value > 0.0 { value } else { MIN_EFFECTIVE_THICKNESS }
}

/// Polygon side count from field text, truncated and clamped to
/// `MIN_POLYGON_SIDES..=MAX_POLYGON_SIDES`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn coerce_sides(text: &str) -> u32 {
    let value = coerce_number(text).trunc();
    value.clamp(f64::from(MIN_POLYGON_SIDES), f64::from(MAX_POLYGON_SIDES)) as u32
}

/// Ordered collection of shape blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockList {
    blocks: Vec<ShapeBlock>,
}

impl BlockList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Append a default `line` block and return its id.
    pub fn add_block(&mut self, defaults: &BlockDefaults) -> BlockId {
        let id = Uuid::new_v4();
        self.blocks.push(ShapeBlock::new(id, defaults));
        id
    }

    /// Remove a block, returning it if it was present.
    pub fn delete_block(&mut self, id: &BlockId) -> Option<ShapeBlock> {
        let index = self.index_of(id)?;
        Some(self.blocks.remove(index))
    }

    /// Move `moved` next to `target`.
    ///
    /// Dragging downward (moved above target) lands just below the target;
    /// dragging upward lands just above it. Either way the moved block ends up
    /// at the target's original index. Returns `false` when nothing moved.
    pub fn move_block(&mut self, moved: &BlockId, target: &BlockId) -> bool {
        if moved == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.index_of(moved), self.index_of(target)) else {
            return false;
        };
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        true
    }

    /// Update one field of one block. Returns `false` if the block is missing
    /// or the value was rejected.
    pub fn set_field(&mut self, id: &BlockId, field: Field, value: impl Into<String>) -> bool {
        let Some(block) = self.get_mut(id) else {
            return false;
        };
        block.set_field(field, value.into())
    }

    /// Return a block by id.
    #[must_use]
    pub fn get(&self, id: &BlockId) -> Option<&ShapeBlock> {
        self.blocks.iter().find(|b| b.id == *id)
    }

    fn get_mut(&mut self, id: &BlockId) -> Option<&mut ShapeBlock> {
        self.blocks.iter_mut().find(|b| b.id == *id)
    }

    /// Position of a block in paint order.
    #[must_use]
    pub fn index_of(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == *id)
    }

    /// Blocks in paint order (bottom first).
    pub fn iter(&self) -> std::slice::Iter<'_, ShapeBlock> {
        self.blocks.iter()
    }

    /// Block ids in paint order.
    #[must_use]
    pub fn ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|b| b.id).collect()
    }

    /// Number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if there are no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a ShapeBlock;
    type IntoIter = std::slice::Iter<'a, ShapeBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
