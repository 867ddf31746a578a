use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use farmhouse::{
    logic::{
        inventory::{count_plants, summarize},
        journal::GrowJournal,
    },
    models::BaseShelvingUnit,
};
use log::{info, warn};

/// Environment variable naming the unit file when no argument is given.
const UNIT_ENV: &str = "FARMHOUSE_UNIT";

fn unit_path() -> Result<PathBuf> {
    if let Some(arg) = env::args().nth(1) {
        return Ok(PathBuf::from(arg));
    }
    env::var(UNIT_ENV)
        .map(PathBuf::from)
        .with_context(|| format!("usage: farmhouse <unit.json> (or set {UNIT_ENV})"))
}

fn load_unit(path: &Path) -> Result<BaseShelvingUnit> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read unit file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid shelving unit description in {}", path.display()))
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let path = unit_path()?;
    let unit = load_unit(&path)?;
    info!("Loaded shelving unit from {}", path.display());

    let mut journal = GrowJournal::new();
    for (i, shelf) in unit.shelves().iter().enumerate() {
        let Some(layout) = &shelf.tray.layout else {
            continue;
        };
        if !layout.is_consistent() {
            warn!(
                "Shelf {i} layout states {} plants but its matrix disagrees; counting the matrix",
                layout.num_plants
            );
        }
        for cup in layout.matrix.iter().flatten().flatten() {
            journal.observe(&cup.plant);
        }
    }

    println!(
        "🌱 Shelving unit {}x{}x{} in, {} shelves, {} plants",
        unit.width,
        unit.length,
        unit.height,
        unit.num_shelves(),
        count_plants(&unit)
    );
    for summary in summarize(&unit) {
        println!(
            "   shelf {}: tray {:.1} in³, {} rows, {} plants",
            summary.shelf, summary.tray_volume, summary.rows, summary.plants
        );
    }
    for entry in journal.entries() {
        println!("   ⚠ {}", entry.event.describe());
    }
    Ok(())
}
