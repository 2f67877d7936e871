use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{RgbaImage, imageops};
use tracing::{debug, info};

use crate::geometry::BoundingBox;
use crate::sprites::{SpriteEntry, SpriteTable};

// ── ExtractReport ────────────────────────────────────────────────────────────

/// What a single extraction run did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Files written, in table order.
    pub written: Vec<PathBuf>,
    /// Entries skipped because they are not allow-listed.
    pub skipped: usize,
}

// ── Cropping (pure, no I/O) ──────────────────────────────────────────────────

/// Copy `bbox` out of `sheet`.
///
/// The result is always `bbox.width() × bbox.height()`. Any part of the box
/// that hangs over the sheet edge comes out as transparent black instead of
/// being clipped, so the output size depends only on the table.
pub fn crop(sheet: &RgbaImage, bbox: BoundingBox) -> Result<RgbaImage> {
    bbox.validate().with_context(|| format!("Invalid crop box {bbox}"))?;

    let (w, h) = bbox.dimensions();
    let mut out = RgbaImage::new(w, h);

    let (sheet_w, sheet_h) = sheet.dimensions();
    if let Some(visible) = bbox.clip_to(sheet_w, sheet_h) {
        let region = imageops::crop_imm(
            sheet,
            visible.left,
            visible.top,
            visible.width(),
            visible.height(),
        )
        .to_image();
        imageops::replace(
            &mut out,
            &region,
            i64::from(visible.left - bbox.left),
            i64::from(visible.top - bbox.top),
        );
    }
    Ok(out)
}

// ── Extraction ───────────────────────────────────────────────────────────────

/// Crop every allow-listed entry of `table` out of the sheet at `sheet_path`
/// and write each one to `out_dir/<name><extension>`.
///
/// The sheet is never modified. Existing sprite files are overwritten. The
/// first failing entry aborts the run; files written before it are kept.
pub fn extract(sheet_path: &Path, table: &SpriteTable, out_dir: &Path) -> Result<ExtractReport> {
    let sheet = image::open(sheet_path)
        .with_context(|| format!("Failed to open sprite sheet {}", sheet_path.display()))?
        .to_rgba8();
    debug!(
        "extract: loaded {} ({}x{})",
        sheet_path.display(),
        sheet.width(),
        sheet.height()
    );

    let mut report = ExtractReport::default();
    for entry in &table.sprites {
        if !table.is_allowed(&entry.name) {
            debug!("extract: '{}' not in allow_write; skipping", entry.name);
            report.skipped += 1;
            continue;
        }
        let path = write_sprite(&sheet, entry, &table.extension, out_dir)?;
        report.written.push(path);
    }
    Ok(report)
}

fn write_sprite(
    sheet: &RgbaImage,
    entry: &SpriteEntry,
    extension: &str,
    out_dir: &Path,
) -> Result<PathBuf> {
    let sprite = crop(sheet, entry.bbox).with_context(|| format!("Failed to crop '{}'", entry.name))?;
    if !entry.bbox.fits_within(sheet.width(), sheet.height()) {
        debug!("extract: '{}' box {} extends past the sheet; padding", entry.name, entry.bbox);
    }

    let path = out_dir.join(entry.file_name(extension));
    sprite
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("wrote {} ({}x{})", path.display(), sprite.width(), sprite.height());
    Ok(path)
}

// ── Missing outputs ──────────────────────────────────────────────────────────

/// Table entries that have no output file in `out_dir` yet.
///
/// Only the top level of `out_dir` is scanned; a missing directory means
/// every entry is missing.
pub fn missing_outputs<'t>(table: &'t SpriteTable, out_dir: &Path) -> Vec<&'t SpriteEntry> {
    let present: HashSet<String> = walkdir::WalkDir::new(out_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.file_name().to_str().map(str::to_owned))
        .collect();

    table
        .sprites
        .iter()
        .filter(|entry| !present.contains(&entry.file_name(&table.extension)))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// 8×4 sheet where every pixel encodes its own coordinates.
    fn coord_sheet() -> RgbaImage {
        RgbaImage::from_fn(8, 4, |x, y| Rgba([x as u8, y as u8, 0xAA, 0xFF]))
    }

    #[test]
    fn crop_inside_sheet_copies_region() {
        let sheet = coord_sheet();
        let out = crop(&sheet, BoundingBox::new(2, 1, 5, 3)).unwrap();
        assert_eq!(out.dimensions(), (3, 2));
        for (x, y, px) in out.enumerate_pixels() {
            assert_eq!(px, sheet.get_pixel(x + 2, y + 1));
        }
    }

    #[test]
    fn crop_past_edge_pads_with_transparent_black() {
        let sheet = coord_sheet();
        let out = crop(&sheet, BoundingBox::new(6, 2, 10, 6)).unwrap();
        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(out.get_pixel(0, 0), sheet.get_pixel(6, 2));
        assert_eq!(out.get_pixel(1, 1), sheet.get_pixel(7, 3));
        assert_eq!(*out.get_pixel(2, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*out.get_pixel(0, 2), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn crop_fully_outside_is_all_transparent() {
        let out = crop(&coord_sheet(), BoundingBox::new(20, 20, 22, 21)).unwrap();
        assert_eq!(out.dimensions(), (2, 1));
        assert!(out.pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn crop_rejects_degenerate_box() {
        assert!(crop(&coord_sheet(), BoundingBox::new(4, 0, 4, 2)).is_err());
    }

    #[test]
    fn missing_outputs_for_absent_dir_is_whole_table() {
        let table = SpriteTable::builtin().unwrap();
        let missing = missing_outputs(&table, Path::new("/nonexistent/gambit-assets"));
        assert_eq!(missing.len(), table.len());
    }
}
