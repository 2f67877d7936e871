//! Cut the capture-tray sprites out of `captured-pieces.png`.
//!
//! Only names listed under `allow_write` in `resources/capture_sprites.json`
//! are written. The list ships empty, so a plain run writes nothing.
//!
//! Run with: cargo run --bin extract-captures

use std::fs::create_dir_all;
use std::process::ExitCode;

use anyhow::{Context, Result};
use gambit_assets::extract::{extract, missing_outputs};
use gambit_assets::sprites::SpriteTable;
use gambit_assets::{CAPTURES_DIR, asset_dir, logging};
use tracing::{error, info};

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let dir = asset_dir(CAPTURES_DIR);
    create_dir_all(&dir)
        .with_context(|| format!("Failed to ensure that {} exists", dir.display()))?;

    let table = SpriteTable::builtin()?;
    let sheet = dir.join(&table.sheet);

    let report = extract(&sheet, &table, &dir)?;
    info!(
        "extract-captures: wrote {} sprite(s), skipped {}",
        report.written.len(),
        report.skipped
    );

    let missing = missing_outputs(&table, &dir);
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|e| e.name.as_str()).collect();
        info!(
            "extract-captures: {} sprite(s) not on disk yet: {}",
            names.len(),
            names.join(", ")
        );
    }
    Ok(())
}
