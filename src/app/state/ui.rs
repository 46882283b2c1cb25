use std::path::PathBuf;

/// UI-bezogener Anwendungszustand (Dialog-Flags, Statuszeile)
#[derive(Default)]
pub struct UiState {
    /// Speichern-unter-Dialog anzeigen
    pub show_export_dialog: bool,
    /// Terrain-Auswahldialog anzeigen
    pub show_terrain_dialog: bool,
    /// Pfad des geladenen Terrains
    pub terrain_path: Option<PathBuf>,
    /// Pfad des letzten erfolgreichen Exports
    pub last_export_path: Option<PathBuf>,
    /// Statusmeldung fuer die Statuszeile (Export, Fehler, …)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
