//! Handler fuer Datei-Operationen (Export, Terrain).

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Oeffnet den Speichern-unter-Dialog.
pub fn request_export(state: &mut AppState) {
    use_cases::file_io::request_export_dialog(state);
}

/// Exportiert die Segment-Tabelle.
///
/// `None` schreibt unter den konfigurierten Export-Pfad.
pub fn export(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    use_cases::file_io::export_profile(state, path)
}

/// Oeffnet den Terrain-Auswahldialog.
pub fn request_terrain(state: &mut AppState) {
    use_cases::file_io::request_terrain_dialog(state);
}

/// Laedt ein Hoehenprofil aus dem uebergebenen Pfad.
pub fn load_terrain(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::load_terrain(state, path)
}
