//! Geteilte Typen fuer layer-uebergreifende Vertraege.
//!
//! Enthaelt Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhaengigkeiten zu vermeiden.

pub mod options;

pub use options::EditorOptions;
pub use options::{EXPORT_PATH, TERRAIN_PATH};
