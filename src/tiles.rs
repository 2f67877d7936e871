use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use image::{Rgb, RgbImage};
use tracing::info;

/// Edge length of a board tile in pixels. Matches the piece asset size.
pub const TILE_SIZE: u32 = 150;

/// A named solid-color board square.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileSpec {
    pub name: &'static str,
    /// `#rrggbb` hex color.
    pub color: &'static str,
}

/// The light and dark board squares.
pub const TILES: &[TileSpec] = &[
    TileSpec { name: "black", color: "#769656" },
    TileSpec { name: "white", color: "#eeeed2" },
];

/// Parse a CSS-style hex color: `#rrggbb` or the `#rgb` shorthand.
pub fn parse_hex_color(s: &str) -> Result<Rgb<u8>> {
    let Some(hex) = s.strip_prefix('#') else {
        bail!("color '{s}' must start with '#'");
    };
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        bail!("color '{s}' is not a hex color");
    }

    let channel = |digits: &str| {
        u8::from_str_radix(digits, 16).with_context(|| format!("color '{s}' is not a hex color"))
    };
    match hex.len() {
        6 => Ok(Rgb([channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?])),
        // #rgb expands each digit: #abc == #aabbcc
        3 => {
            let r = channel(&hex[0..1])?;
            let g = channel(&hex[1..2])?;
            let b = channel(&hex[2..3])?;
            Ok(Rgb([r * 0x11, g * 0x11, b * 0x11]))
        }
        n => bail!("color '{s}' has {n} hex digits, expected 3 or 6"),
    }
}

/// A `size × size` image filled with `color`.
pub fn render_tile(color: Rgb<u8>, size: u32) -> RgbImage {
    RgbImage::from_pixel(size, size, color)
}

/// Write one PNG per tile into `out_dir`, overwriting whatever is there.
///
/// Every color is parsed before anything is written, so a bad table leaves
/// the directory untouched.
pub fn generate(tiles: &[TileSpec], out_dir: &Path) -> Result<Vec<PathBuf>> {
    let colors = tiles
        .iter()
        .map(|t| parse_hex_color(t.color).with_context(|| format!("Bad color for tile '{}'", t.name)))
        .collect::<Result<Vec<_>>>()?;

    let mut written = Vec::with_capacity(tiles.len());
    for (tile, color) in tiles.iter().zip(colors) {
        let path = out_dir.join(format!("{}.png", tile.name));
        render_tile(color, TILE_SIZE)
            .save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("wrote {} ({TILE_SIZE}x{TILE_SIZE}, {})", path.display(), tile.color);
        written.push(path);
    }
    Ok(written)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
