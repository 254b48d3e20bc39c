#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use uuid::Uuid;

use super::*;

fn list_with(n: usize) -> (BlockList, Vec<BlockId>) {
    let mut list = BlockList::new();
    let ids = (0..n).map(|_| list.add_block(&BlockDefaults::default())).collect();
    (list, ids)
}

// =============================================================
// ShapeType
// =============================================================

#[test]
fn shape_default_is_line() {
    assert_eq!(ShapeType::default(), ShapeType::Line);
}

#[test]
fn shape_serde_names_are_lowercase() {
    let cases = [
        (ShapeType::Line, "\"line\""),
        (ShapeType::Rect, "\"rect\""),
        (ShapeType::Square, "\"square\""),
        (ShapeType::Circle, "\"circle\""),
        (ShapeType::Polygon, "\"polygon\""),
    ];
    for (shape, expected) in cases {
        assert_eq!(serde_json::to_string(&shape).unwrap(), expected);
    }
}

#[test]
fn shape_from_str_accepts_every_wire_name() {
    for shape in ShapeType::ALL {
        assert_eq!(shape.as_str().parse::<ShapeType>(), Ok(shape));
    }
}

#[test]
fn shape_from_str_rejects_unknown() {
    let err = "hexagon".parse::<ShapeType>().unwrap_err();
    assert_eq!(err, UnknownShape("hexagon".to_owned()));
    assert_eq!(err.to_string(), "unknown shape type: \"hexagon\"");
}

#[test]
fn shape_labels_match_field_table() {
    assert_eq!(ShapeType::Line.x2_label(), "x2");
    assert_eq!(ShapeType::Line.y2_label(), Some("y2"));
    assert_eq!(ShapeType::Rect.x2_label(), "width");
    assert_eq!(ShapeType::Rect.y2_label(), Some("height"));
    assert_eq!(ShapeType::Square.x2_label(), "size");
    assert_eq!(ShapeType::Square.y2_label(), None);
    assert_eq!(ShapeType::Circle.x2_label(), "radius");
    assert_eq!(ShapeType::Circle.y2_label(), None);
    assert_eq!(ShapeType::Polygon.x2_label(), "radius");
    assert_eq!(ShapeType::Polygon.y2_label(), Some("sides"));
}

#[test]
fn y2_hidden_only_for_square_and_circle() {
    let hidden: Vec<_> = ShapeType::ALL.into_iter().filter(|s| !s.y2_visible()).collect();
    assert_eq!(hidden, vec![ShapeType::Square, ShapeType::Circle]);
}

// =============================================================
// Field
// =============================================================

#[test]
fn field_axis_tags() {
    assert_eq!(Field::X1.axis(), Some(Axis::X));
    assert_eq!(Field::X2.axis(), Some(Axis::X));
    assert_eq!(Field::Y1.axis(), Some(Axis::Y));
    assert_eq!(Field::Y2.axis(), Some(Axis::Y));
    assert_eq!(Field::Thickness.axis(), Some(Axis::Y));
    assert_eq!(Field::Color.axis(), None);
    assert_eq!(Field::Shape.axis(), None);
}

#[test]
fn field_placeholders_follow_shape() {
    assert_eq!(Field::X1.placeholder(ShapeType::Circle), "x1");
    assert_eq!(Field::Y1.placeholder(ShapeType::Circle), "y1");
    assert_eq!(Field::X2.placeholder(ShapeType::Circle), "radius");
    assert_eq!(Field::Y2.placeholder(ShapeType::Polygon), "sides");
    assert_eq!(Field::Thickness.placeholder(ShapeType::Line), "px");
}

#[test]
fn field_y2_visibility_follows_shape() {
    assert!(Field::Y2.is_visible(ShapeType::Rect));
    assert!(!Field::Y2.is_visible(ShapeType::Square));
    assert!(Field::X2.is_visible(ShapeType::Square));
}

// =============================================================
// Coercion
// =============================================================

#[test]
fn coerce_number_parses_plain_and_padded_numbers() {
    assert_eq!(coerce_number("42"), 42.0);
    assert_eq!(coerce_number("  -3.5 "), -3.5);
    assert_eq!(coerce_number("1e2"), 100.0);
}

#[test]
fn coerce_number_maps_junk_to_zero() {
    assert_eq!(coerce_number(""), 0.0);
    assert_eq!(coerce_number("   "), 0.0);
    assert_eq!(coerce_number("abc"), 0.0);
    assert_eq!(coerce_number("12px"), 0.0);
    assert_eq!(coerce_number("NaN"), 0.0);
    assert_eq!(coerce_number("inf"), 0.0);
    assert_eq!(coerce_number("1e400"), 0.0);
}

#[test]
fn coerce_thickness_defaults_to_one() {
    assert_eq!(coerce_thickness(""), 1.0);
    assert_eq!(coerce_thickness("0"), 1.0);
    assert_eq!(coerce_thickness("-4"), 1.0);
    assert_eq!(coerce_thickness("wide"), 1.0);
    assert_eq!(coerce_thickness("2.5"), 2.5);
}

#[test]
fn coerce_sides_has_floor_of_three() {
    assert_eq!(coerce_sides(""), 3);
    assert_eq!(coerce_sides("0"), 3);
    assert_eq!(coerce_sides("2"), 3);
    assert_eq!(coerce_sides("-7"), 3);
    assert_eq!(coerce_sides("5"), 5);
    assert_eq!(coerce_sides("6.9"), 6);
}

#[test]
fn coerce_sides_is_capped() {
    assert_eq!(coerce_sides("1000000000"), MAX_POLYGON_SIDES);
}

// =============================================================
// ShapeBlock
// =============================================================

#[test]
fn new_block_is_line_with_defaults() {
    let id = Uuid::new_v4();
    let block = ShapeBlock::new(id, &BlockDefaults::default());
    assert_eq!(block.id, id);
    assert_eq!(block.shape, ShapeType::Line);
    assert_eq!(block.x1, "");
    assert_eq!(block.color, "#000000");
    assert_eq!(block.thickness, "");
}

#[test]
fn block_field_reads_every_slot() {
    let mut block = ShapeBlock::new(Uuid::new_v4(), &BlockDefaults::default());
    for (i, field) in Field::INPUTS.into_iter().enumerate() {
        assert!(block.set_field(field, format!("v{i}")));
    }
    for (i, field) in Field::INPUTS.into_iter().enumerate() {
        assert_eq!(block.field(field), format!("v{i}"));
    }
    assert_eq!(block.field(Field::Shape), "line");
}

#[test]
fn set_field_keeps_raw_text() {
    let mut block = ShapeBlock::new(Uuid::new_v4(), &BlockDefaults::default());
    block.set_field(Field::X1, " 12abc ".to_owned());
    assert_eq!(block.x1, " 12abc ");
    assert_eq!(block.geometry().x1, 0.0);
}

#[test]
fn set_field_shape_rejects_unknown_name() {
    let mut block = ShapeBlock::new(Uuid::new_v4(), &BlockDefaults::default());
    block.set_field(Field::Shape, "rect".to_owned());
    assert!(!block.set_field(Field::Shape, "blob".to_owned()));
    assert_eq!(block.shape, ShapeType::Rect);
}

#[test]
fn shape_round_trip_preserves_numeric_fields() {
    let mut block = ShapeBlock::new(Uuid::new_v4(), &BlockDefaults::default());
    block.set_field(Field::X1, "10".to_owned());
    block.set_field(Field::Y1, "20".to_owned());
    block.set_field(Field::X2, "30".to_owned());
    block.set_field(Field::Y2, "40".to_owned());
    block.set_field(Field::Thickness, "3".to_owned());
    let before = block.clone();

    for shape in ["circle", "square", "polygon", "rect", "line"] {
        block.set_field(Field::Shape, shape.to_owned());
    }

    assert_eq!(block, before);
}

#[test]
fn geometry_applies_all_coercions() {
    let mut block = ShapeBlock::new(Uuid::new_v4(), &BlockDefaults::default());
    block.set_field(Field::X1, "5".to_owned());
    block.set_field(Field::Y1, "x".to_owned());
    block.set_field(Field::X2, "7.5".to_owned());
    block.set_field(Field::Y2, "".to_owned());
    block.set_field(Field::Thickness, "0".to_owned());
    let g = block.geometry();
    assert_eq!(g.x1, 5.0);
    assert_eq!(g.y1, 0.0);
    assert_eq!(g.x2, 7.5);
    assert_eq!(g.y2, 0.0);
    assert_eq!(g.thickness, 1.0);
    assert_eq!(g.sides, 3);
}

// =============================================================
// BlockList: add / delete
// =============================================================

#[test]
fn list_starts_empty() {
    let list = BlockList::default();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

#[test]
fn add_block_appends_in_creation_order() {
    let (list, ids) = list_with(3);
    assert_eq!(list.ids(), ids);
    assert!(list.iter().all(|b| b.shape == ShapeType::Line));
}

#[test]
fn add_block_uses_given_defaults() {
    let mut list = BlockList::new();
    let defaults = BlockDefaults { color: "#ff0000".to_owned(), thickness: "2".to_owned() };
    let id = list.add_block(&defaults);
    let block = list.get(&id).unwrap();
    assert_eq!(block.color, "#ff0000");
    assert_eq!(block.thickness, "2");
}

#[test]
fn delete_block_removes_and_returns() {
    let (mut list, ids) = list_with(3);
    let removed = list.delete_block(&ids[1]).unwrap();
    assert_eq!(removed.id, ids[1]);
    assert_eq!(list.ids(), vec![ids[0], ids[2]]);
}

#[test]
fn delete_block_twice_is_noop() {
    let (mut list, ids) = list_with(2);
    assert!(list.delete_block(&ids[0]).is_some());
    assert!(list.delete_block(&ids[0]).is_none());
    assert_eq!(list.ids(), vec![ids[1]]);
}

#[test]
fn len_tracks_adds_minus_deletes() {
    let mut list = BlockList::new();
    let mut adds = 0;
    let mut deletes = 0;
    let mut live = Vec::new();
    for step in 0..40 {
        if step % 3 == 2 {
            if let Some(id) = live.pop() {
                list.delete_block(&id);
                deletes += 1;
            }
        } else {
            live.push(list.add_block(&BlockDefaults::default()));
            adds += 1;
        }
        if step % 5 == 0 && live.len() > 1 {
            list.move_block(&live[0], &live[live.len() - 1]);
        }
        assert_eq!(list.len(), adds - deletes);
    }
}

// =============================================================
// BlockList: move
// =============================================================

#[test]
fn move_upward_lands_before_target() {
    let (mut list, ids) = list_with(4);
    assert!(list.move_block(&ids[2], &ids[0]));
    assert_eq!(list.ids(), vec![ids[2], ids[0], ids[1], ids[3]]);
}

#[test]
fn move_downward_lands_after_target() {
    let (mut list, ids) = list_with(4);
    assert!(list.move_block(&ids[0], &ids[2]));
    assert_eq!(list.ids(), vec![ids[1], ids[2], ids[0], ids[3]]);
}

#[test]
fn move_adjacent_swaps() {
    let (mut list, ids) = list_with(3);
    list.move_block(&ids[1], &ids[2]);
    assert_eq!(list.ids(), vec![ids[0], ids[2], ids[1]]);
    list.move_block(&ids[1], &ids[2]);
    assert_eq!(list.ids(), vec![ids[0], ids[1], ids[2]]);
}

#[test]
fn move_to_last_position() {
    let (mut list, ids) = list_with(3);
    list.move_block(&ids[0], &ids[2]);
    assert_eq!(list.ids(), vec![ids[1], ids[2], ids[0]]);
}

#[test]
fn move_onto_self_is_noop() {
    let (mut list, ids) = list_with(3);
    assert!(!list.move_block(&ids[1], &ids[1]));
    assert_eq!(list.ids(), ids);
}

#[test]
fn move_with_unknown_id_is_noop() {
    let (mut list, ids) = list_with(2);
    assert!(!list.move_block(&Uuid::new_v4(), &ids[0]));
    assert!(!list.move_block(&ids[0], &Uuid::new_v4()));
    assert_eq!(list.ids(), ids);
}

#[test]
fn move_keeps_field_values() {
    let (mut list, ids) = list_with(3);
    list.set_field(&ids[2], Field::X1, "99");
    list.move_block(&ids[2], &ids[0]);
    assert_eq!(list.get(&ids[2]).unwrap().x1, "99");
    assert_eq!(list.index_of(&ids[2]), Some(0));
}

// =============================================================
// BlockList: set_field
// =============================================================

#[test]
fn set_field_on_missing_block_returns_false() {
    let mut list = BlockList::new();
    assert!(!list.set_field(&Uuid::new_v4(), Field::X1, "1"));
}

#[test]
fn set_field_touches_only_target_block() {
    let (mut list, ids) = list_with(2);
    assert!(list.set_field(&ids[0], Field::Color, "#00ff00"));
    assert_eq!(list.get(&ids[0]).unwrap().color, "#00ff00");
    assert_eq!(list.get(&ids[1]).unwrap().color, "#000000");
}

#[test]
fn iterates_by_reference() {
    let (list, ids) = list_with(2);
    let collected: Vec<BlockId> = (&list).into_iter().map(|b| b.id).collect();
    assert_eq!(collected, ids);
}
