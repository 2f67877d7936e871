use std::collections::HashSet;

use gambit_assets::sprites::{
    CapturedKind, PieceColor, SpriteTable, all_capture_sprite_names, capture_sprite_name,
};

#[test]
fn builtin_table_has_thirty_valid_boxes() {
    let table = SpriteTable::builtin().unwrap();
    assert_eq!(table.len(), 30);
    assert_eq!(table.sheet, "captured-pieces.png");
    assert_eq!(table.extension, ".png");
    for entry in &table.sprites {
        assert!(entry.bbox.validate().is_ok(), "'{}' has a degenerate box", entry.name);
    }
}

#[test]
fn builtin_table_covers_every_capture_sprite() {
    let table = SpriteTable::builtin().unwrap();
    let in_table: HashSet<&str> = table.sprites.iter().map(|s| s.name.as_str()).collect();
    for name in all_capture_sprite_names() {
        assert!(in_table.contains(name.as_str()), "'{name}' missing from table");
    }
}

#[test]
fn builtin_boxes_fit_the_sheet() {
    // White queen is the rightmost box, the single pawns the lowest.
    let table = SpriteTable::builtin().unwrap();
    let max_right = table.sprites.iter().map(|s| s.bbox.right).max().unwrap();
    let max_bottom = table.sprites.iter().map(|s| s.bbox.bottom).max().unwrap();
    assert_eq!((max_right, max_bottom), (683, 386));
}

#[test]
fn pawn_sprites_shrink_with_count() {
    let table = SpriteTable::builtin().unwrap();
    for color in PieceColor::ALL {
        let widths: Vec<u32> = (1..=8)
            .map(|n| {
                let name = capture_sprite_name(color, CapturedKind::Pawn, n).unwrap();
                table.get(&name).unwrap().bbox.width()
            })
            .collect();
        assert!(widths.windows(2).all(|w| w[0] < w[1]), "{color}: {widths:?}");
    }
}

#[test]
fn white_queen_box() {
    let table = SpriteTable::builtin().unwrap();
    let entry = table.get("white-queen").unwrap();
    assert_eq!(entry.bbox.dimensions(), (34, 36));
    assert_eq!(entry.file_name(&table.extension), "white-queen.png");
}

#[test]
fn unknown_allow_list_names_are_ignored() {
    let json = r#"{
        "sheet": "s.png",
        "extension": ".png",
        "allow_write": ["ghost", "a"],
        "sprites": [{ "name": "a", "box": [0, 0, 1, 1] }]
    }"#;
    let table = SpriteTable::from_json(json).unwrap();
    let allowed: Vec<_> = table.allowed().map(|s| s.name.as_str()).collect();
    assert_eq!(allowed, ["a"]);
}
