pub mod extract;
pub mod geometry;
pub mod logging;
pub mod sprites;
pub mod tiles;

use std::path::PathBuf;

/// Crop table for the captured-pieces sprite sheet (see `SpriteTable::from_json`).
pub const CAPTURE_SPRITES_JSON: &str = include_str!("../resources/capture_sprites.json");

/// Directory holding `captured-pieces.png` and the sprites cut from it.
pub const CAPTURES_DIR: &str = "assets/images/captures";

/// Directory receiving the board tile images.
pub const TILES_DIR: &str = "assets/tiles";

/// Resolve an asset directory against the package root, so the tools work
/// regardless of the directory they are launched from.
pub fn asset_dir(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}
