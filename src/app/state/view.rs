use crate::core::TerrainProfile;

/// View-bezogener Anwendungszustand
#[derive(Default)]
pub struct ViewState {
    /// Geladenes Hoehenprofil (None = keine Terrain-Datei)
    pub terrain: Option<TerrainProfile>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self { terrain: None }
    }
}
