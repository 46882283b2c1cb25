use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgefuehrt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Punkt unter dem Zeiger greifen, sonst neuen Punkt hinzufuegen
    BeginDragOrAddPoint { position: f64, speed: f64 },
    /// Gezogenen Punkt verschieben
    UpdateDrag { position: f64, speed: f64 },
    /// Drag-Geste beenden
    EndDrag,
    /// Naechsten Punkt innerhalb von `threshold` entfernen
    RemoveNearestPoint {
        position: f64,
        speed: f64,
        threshold: f64,
    },
    /// Alle Punkte entfernen
    ClearPoints,
    /// Segment-Tabelle exportieren (`None` = konfigurierter Export-Pfad)
    ExportSegments { path: Option<PathBuf> },
    /// Speichern-unter-Dialog anfordern
    RequestExportDialog,
    /// Terrain-Auswahldialog anfordern
    RequestTerrainDialog,
    /// Terrain laden
    LoadTerrain { path: PathBuf },
    /// Anwendung beenden
    RequestExit,
}
