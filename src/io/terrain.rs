//! Parser fuer Terrain-CSV-Dateien (`distance,elevation`, keine Kopfzeile).

use crate::core::TerrainProfile;
use anyhow::{Context, Result};
use std::path::Path;

/// Parsed ein Hoehenprofil aus CSV-Text.
pub fn parse_terrain_csv(content: &str) -> Result<TerrainProfile> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut samples = Vec::new();
    for (index, row) in reader.deserialize::<(f64, f64)>().enumerate() {
        let sample = row.with_context(|| format!("Terrain-Zeile {} ungueltig", index + 1))?;
        samples.push(sample);
    }

    TerrainProfile::from_samples(samples)
}

/// Laedt ein Hoehenprofil aus einer Datei.
pub fn load_terrain(path: &Path) -> Result<TerrainProfile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Fehler beim Laden des Terrains: {}", path.display()))?;
    let terrain = parse_terrain_csv(&content)
        .with_context(|| format!("Terrain-Datei fehlerhaft: {}", path.display()))?;

    log::info!(
        "Terrain geladen: {} Stuetzstellen aus {}",
        terrain.len(),
        path.display()
    );
    Ok(terrain)
}
