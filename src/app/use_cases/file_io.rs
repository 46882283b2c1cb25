//! Use-Case-Funktionen fuer Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::core::export_segments;
use std::path::PathBuf;

/// Oeffnet den Speichern-unter-Dialog ueber UI-State.
pub fn request_export_dialog(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Oeffnet den Terrain-Auswahldialog ueber UI-State.
pub fn request_terrain_dialog(state: &mut AppState) {
    state.ui.show_terrain_dialog = true;
}

/// Exportiert die Segment-Tabelle.
///
/// Weniger als zwei Punkte sind kein Fehler: es wird nichts geschrieben und
/// nur eine Statusmeldung gesetzt.
pub fn export_profile(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    let records = export_segments(state.editor.profile.snapshot());
    if records.is_empty() {
        let msg = "Nothing to export: at least two points are required".to_string();
        log::info!("{}", msg);
        state.ui.status_message = Some(msg);
        return Ok(());
    }

    let path = path.unwrap_or_else(|| state.options.export_path.clone());
    crate::io::save_segments(&path, &records)?;

    state.ui.status_message = Some(format!(
        "Speed vs Distance data saved to {}",
        path.display()
    ));
    state.ui.last_export_path = Some(path);
    Ok(())
}

/// Laedt ein Hoehenprofil und ersetzt das bisherige.
///
/// Bei Fehler bleibt das bisherige Terrain erhalten.
pub fn load_terrain(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let terrain = crate::io::load_terrain(&path)?;

    state.ui.status_message = Some(format!(
        "Terrain loaded: {} samples",
        terrain.len()
    ));
    state.view.terrain = Some(terrain);
    state.ui.terrain_path = Some(path);
    Ok(())
}
