use crate::app::CommandLog;
use crate::core::PlotAxes;
use crate::shared::EditorOptions;

use super::{EditorState, UiState, ViewState};

/// Hauptzustand der Anwendung: die eine Editor-Session.
///
/// Wird jedem Handler explizit uebergeben; es gibt keinen globalen Zustand.
pub struct AppState {
    /// Profil, aktiver Drag und abgeleitete Kennzahlen
    pub editor: EditorState,
    /// View-State (Viewport, Terrain)
    pub view: ViewState,
    /// UI-State (Dialoge, Statusmeldung)
    pub ui: UiState,
    /// Verlauf ausgefuehrter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den uebergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            editor: EditorState::new(options.speed_limits(), options.hit_threshold),
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Anzahl der Kontrollpunkte (fuer UI-Anzeige).
    pub fn point_count(&self) -> usize {
        self.editor.profile.len()
    }

    /// Achsen fuer Terrain und aktuelle Geschwindigkeitsgrenzen.
    pub fn plot_axes(&self) -> PlotAxes {
        PlotAxes::for_terrain(self.view.terrain.as_ref(), self.editor.profile.limits())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
