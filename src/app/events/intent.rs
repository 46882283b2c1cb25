use std::path::PathBuf;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Koordinaten sind bereits in Datenraum umgerechnet (m, m/s).
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Linksklick auf den Canvas: vorhandenen Punkt greifen oder neuen setzen
    CanvasPressed { position: f64, speed: f64 },
    /// Mausbewegung mit gedrueckter linker Taste
    CanvasDragged { position: f64, speed: f64 },
    /// Linke Taste losgelassen (oder Zeiger hat den Canvas verlassen)
    CanvasReleased,
    /// Rechtsklick auf den Canvas: naechsten Punkt entfernen
    CanvasSecondaryPressed { position: f64, speed: f64 },
    /// "Clear Points"
    ClearRequested,
    /// "Save Data" unter dem konfigurierten Export-Pfad
    SaveRequested,
    /// "Save As…" (zeigt Dateidialog)
    SaveAsRequested,
    /// Export-Pfad wurde im Dialog ausgewaehlt
    ExportPathSelected { path: PathBuf },
    /// Terrain-Auswahldialog oeffnen
    OpenTerrainRequested,
    /// Terrain-Datei wurde ausgewaehlt (Dialog oder Start)
    TerrainFileSelected { path: PathBuf },
    /// Anwendung beenden
    ExitRequested,
}
