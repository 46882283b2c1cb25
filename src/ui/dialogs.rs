//! Datei-Dialoge (Export-Ziel, Terrain-Auswahl).

use crate::app::{AppIntent, UiState};
use crate::shared::EditorOptions;

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState, options: &EditorOptions) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Speichern-unter-Dialog
    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        let default_name = ui_state
            .last_export_path
            .as_deref()
            .unwrap_or(options.export_path.as_path())
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("speed_vs_distance.csv")
            .to_owned();

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(default_name)
            .save_file()
        {
            events.push(AppIntent::ExportPathSelected { path });
        }
    }

    // Terrain-Auswahl-Dialog
    if ui_state.show_terrain_dialog {
        ui_state.show_terrain_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Terrain CSV", &["csv", "txt"])
            .pick_file()
        {
            events.push(AppIntent::TerrainFileSelected { path });
        }
    }

    events
}
