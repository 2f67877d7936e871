//! Write the light and dark board square images.
//!
//! Run with: cargo run --bin generate-tiles

use std::fs::create_dir_all;
use std::process::ExitCode;

use anyhow::{Context, Result};
use gambit_assets::tiles::{TILES, generate};
use gambit_assets::{TILES_DIR, asset_dir, logging};
use tracing::error;

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
    let dir = asset_dir(TILES_DIR);
    create_dir_all(&dir)
        .with_context(|| format!("Failed to ensure that {} exists", dir.display()))?;
    generate(TILES, &dir)?;
    Ok(())
}
