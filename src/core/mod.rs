//! Core-Domaenentypen: Kontrollpunkte, Profil-Modell, Spatial-Index, Kennzahlen, Achsen.

pub mod axes;
pub mod control_point;
pub mod metrics;
/// Das Geschwindigkeitsprofil
///
/// Besitzt die sortierten Kontrollpunkte und alle mutierenden Operationen
/// (Hinzufuegen, Drag, Entfernen, Leeren).
pub mod profile;
pub mod spatial;
pub mod terrain;

pub use axes::{AxisRange, PlotAxes, PlotViewport};
pub use control_point::{ControlPoint, SpeedLimits, MAX_SPEED, MIN_SPEED};
pub use metrics::{
    export_segments, format_total_time, total_transit_time, ProfileMetrics, SegmentRecord,
};
pub use profile::{DragHandle, PointId, ProfileModel, DEFAULT_HIT_THRESHOLD};
pub use spatial::{SpatialIndex, SpatialMatch};
pub use terrain::TerrainProfile;
