//! Zentrale Konfiguration fuer den Drive-Cycle-Editor.
//!
//! `EditorOptions` enthaelt alle zur Laufzeit aenderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{SpeedLimits, DEFAULT_HIT_THRESHOLD, MAX_SPEED, MIN_SPEED};

// ── Dateien ─────────────────────────────────────────────────────────

/// Standard-Pfad des Hoehenprofils (relativ zum Arbeitsverzeichnis).
pub const TERRAIN_PATH: &str = "sonomaLinearized.csv";
/// Standard-Pfad der Export-Datei.
pub const EXPORT_PATH: &str = "speed_vs_distance.csv";

// ── Darstellung ─────────────────────────────────────────────────────

/// Radius der Kontrollpunkte in Screen-Pixeln.
pub const POINT_RADIUS_PX: f32 = 4.0;
/// Farbe der Geschwindigkeitskurve (RGBA: Rot).
pub const SPEED_COLOR: [u8; 4] = [220, 30, 30, 255];
/// Farbe der Hoehenkurve (RGBA: Blau).
pub const ELEVATION_COLOR: [u8; 4] = [30, 60, 220, 255];
/// Farbe des gerade gezogenen Punkts (RGBA: Orange).
pub const DRAG_COLOR: [u8; 4] = [255, 140, 0, 255];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit aenderbaren Editor-Optionen.
/// Wird als `drive_cycle_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Profil ──────────────────────────────────────────────────
    /// Untergrenze der Geschwindigkeit (m/s)
    pub min_speed: f64,
    /// Obergrenze der Geschwindigkeit (m/s)
    pub max_speed: f64,
    /// Trefferradius fuer Drag/Entfernen in gemischten Einheiten (m, m/s)
    pub hit_threshold: f64,

    // ── Dateien ─────────────────────────────────────────────────
    /// Hoehenprofil, das beim Start geladen wird
    pub terrain_path: PathBuf,
    /// Ziel fuer "Save Data"
    pub export_path: PathBuf,

    // ── Darstellung ─────────────────────────────────────────────
    /// Radius der Kontrollpunkte in Pixeln
    pub point_radius_px: f32,
    /// Farbe der Geschwindigkeitskurve
    pub speed_color: [u8; 4],
    /// Farbe der Hoehenkurve
    pub elevation_color: [u8; 4],
    /// Farbe des gezogenen Punkts
    pub drag_color: [u8; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            hit_threshold: DEFAULT_HIT_THRESHOLD,

            terrain_path: PathBuf::from(TERRAIN_PATH),
            export_path: PathBuf::from(EXPORT_PATH),

            point_radius_px: POINT_RADIUS_PX,
            speed_color: SPEED_COLOR,
            elevation_color: ELEVATION_COLOR,
            drag_color: DRAG_COLOR,
        }
    }
}

impl EditorOptions {
    /// Laedt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("drive_cycle_editor"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("drive_cycle_editor.toml")
    }

    /// Geschwindigkeitsgrenzen aus `min_speed`/`max_speed`.
    pub fn speed_limits(&self) -> SpeedLimits {
        SpeedLimits::new(self.min_speed, self.max_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_profile_constants() {
        let options = EditorOptions::default();
        assert_eq!(options.speed_limits(), SpeedLimits::new(0.0, 15.0));
        assert_eq!(options.hit_threshold, 2.5);
        assert_eq!(options.export_path, PathBuf::from("speed_vs_distance.csv"));
    }

    #[test]
    fn toml_roundtrip_preserves_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("options.toml");

        let options = EditorOptions {
            max_speed: 30.0,
            hit_threshold: 4.0,
            export_path: PathBuf::from("out/profile.csv"),
            ..EditorOptions::default()
        };
        options.save_to_file(&path).expect("Speichern erwartet");

        assert_eq!(EditorOptions::load_from_file(&path), options);
    }

    #[test]
    fn partial_file_falls_back_per_field() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("options.toml");
        std::fs::write(&path, "max_speed = 25.0\n").expect("schreiben");

        let options = EditorOptions::load_from_file(&path);
        assert_eq!(options.max_speed, 25.0);
        assert_eq!(options.min_speed, 0.0);
        assert_eq!(options.hit_threshold, 2.5);
    }

    #[test]
    fn malformed_or_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("options.toml");
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());

        std::fs::write(&path, "max_speed = \"schnell\"").expect("schreiben");
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }
}
