use crate::core::{DragHandle, ProfileMetrics, ProfileModel, SpeedLimits};

/// Zustand des Profil-Editors
pub struct EditorState {
    /// Die Kontrollpunkte
    pub profile: ProfileModel,
    /// Aktive Drag-Geste (hoechstens eine)
    pub drag: Option<DragHandle>,
    /// Zuletzt berechnete Kennzahlen, nach jeder Mutation aktualisiert
    pub metrics: ProfileMetrics,
}

impl EditorState {
    /// Erstellt einen leeren Editor mit den gegebenen Grenzen.
    pub fn new(limits: SpeedLimits, hit_threshold: f64) -> Self {
        Self {
            profile: ProfileModel::with_settings(limits, hit_threshold),
            drag: None,
            metrics: ProfileMetrics::default(),
        }
    }

    /// Berechnet die Kennzahlen aus dem aktuellen Snapshot neu.
    pub fn refresh_metrics(&mut self) {
        self.metrics = ProfileMetrics::compute(self.profile.snapshot());
    }

    /// `true`, solange ein Drag-Handle aktiv ist.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Index des gerade gezogenen Punkts (fuer Hervorhebung).
    pub fn dragged_index(&self) -> Option<usize> {
        self.drag
            .as_ref()
            .and_then(|handle| self.profile.index_of(handle))
    }
}
