use std::collections::HashSet;
use std::fmt;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::warn;

use crate::geometry::BoundingBox;

// ── SpriteEntry ──────────────────────────────────────────────────────────────

/// One named region of the sprite sheet.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SpriteEntry {
    pub name: String,
    #[serde(rename = "box")]
    pub bbox: BoundingBox,
}

impl SpriteEntry {
    pub fn new(name: impl Into<String>, bbox: BoundingBox) -> Self {
        Self { name: name.into(), bbox }
    }

    /// Output file name: the identifier plus the table's extension.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}{}", self.name, extension)
    }
}

// ── SpriteTable ──────────────────────────────────────────────────────────────

/// The hand-maintained crop table for a sprite sheet.
///
/// `sprites` keeps the order of the source file so output happens in a
/// predictable sequence. Only names listed in `allow_write` are ever written
/// to disk; the rest are skipped.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SpriteTable {
    /// File name of the sheet, relative to the asset directory.
    pub sheet: String,
    /// Extension appended to every sprite name, dot included.
    pub extension: String,
    #[serde(default)]
    pub allow_write: Vec<String>,
    pub sprites: Vec<SpriteEntry>,
}

impl SpriteTable {
    /// Parse a table from JSON and check it for duplicate names.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: SpriteTable =
            serde_json::from_str(json).context("Failed to parse sprite table JSON")?;
        table.check_unique_names()?;
        table.warn_unknown_allowed();
        Ok(table)
    }

    /// The capture-sprite table for `captured-pieces.png`, compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(crate::CAPTURE_SPRITES_JSON).context("Built-in capture sprite table is invalid")
    }

    /// Replace the allow-list. Used by tests and by callers that want to
    /// materialize a specific subset.
    pub fn with_allow_write<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_write = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn get(&self, name: &str) -> Option<&SpriteEntry> {
        self.sprites.iter().find(|s| s.name == name)
    }

    pub fn is_allowed(&self, name: &str) -> bool {
        self.allow_write.iter().any(|n| n == name)
    }

    /// Allow-listed entries, in table order.
    pub fn allowed(&self) -> impl Iterator<Item = &SpriteEntry> {
        self.sprites.iter().filter(|s| self.is_allowed(&s.name))
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    fn check_unique_names(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for entry in &self.sprites {
            if !seen.insert(entry.name.as_str()) {
                bail!("Sprite table lists '{}' more than once", entry.name);
            }
        }
        Ok(())
    }

    fn warn_unknown_allowed(&self) {
        for name in &self.allow_write {
            if self.get(name).is_none() {
                warn!("allow_write names '{name}', which is not in the sprite table; ignoring");
            }
        }
    }
}

// ── Capture sprite naming ────────────────────────────────────────────────────

/// Side that owns a captured piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Black,
    White,
}

impl PieceColor {
    pub const ALL: [PieceColor; 2] = [PieceColor::Black, PieceColor::White];
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PieceColor::Black => "black",
            PieceColor::White => "white",
        })
    }
}

/// Piece types that can appear in a capture tray. Kings are never captured.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CapturedKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl CapturedKind {
    pub const ALL: [CapturedKind; 5] = [
        CapturedKind::Pawn,
        CapturedKind::Knight,
        CapturedKind::Bishop,
        CapturedKind::Rook,
        CapturedKind::Queen,
    ];

    /// Largest number of this kind one side can lose without promotions.
    pub fn max_count(self) -> u32 {
        match self {
            CapturedKind::Pawn => 8,
            CapturedKind::Knight | CapturedKind::Bishop | CapturedKind::Rook => 2,
            CapturedKind::Queen => 1,
        }
    }

    fn plural(self) -> &'static str {
        match self {
            CapturedKind::Pawn => "pawns",
            CapturedKind::Knight => "knights",
            CapturedKind::Bishop => "bishops",
            CapturedKind::Rook => "rooks",
            CapturedKind::Queen => "queens",
        }
    }
}

/// Identifier of the sprite showing `count` captured pieces of one kind,
/// e.g. `white-pawns-3` or `black-queen`.
///
/// Returns `None` for a count of zero or above [`CapturedKind::max_count`].
pub fn capture_sprite_name(color: PieceColor, kind: CapturedKind, count: u32) -> Option<String> {
    if count == 0 || count > kind.max_count() {
        return None;
    }
    Some(match kind {
        CapturedKind::Queen => format!("{color}-queen"),
        _ => format!("{color}-{}-{count}", kind.plural()),
    })
}

/// Every capture-sprite identifier, grouped by color then kind.
pub fn all_capture_sprite_names() -> Vec<String> {
    let mut names = Vec::new();
    for color in PieceColor::ALL {
        for kind in CapturedKind::ALL {
            for count in 1..=kind.max_count() {
                names.extend(capture_sprite_name(color, kind, count));
            }
        }
    }
    names
}

// ── Tests ─────────────────────────────────────────────────────────────────────
