//! Drive Cycle Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod io;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditorState, UiState, ViewState};
pub use core::{
    export_segments, format_total_time, total_transit_time, ControlPoint, DragHandle, PointId,
    ProfileMetrics, ProfileModel, SegmentRecord, SpeedLimits,
};
pub use core::{PlotAxes, PlotViewport, SpatialIndex, SpatialMatch, TerrainProfile};
pub use io::{load_terrain, parse_terrain_csv, save_segments, write_segments};
pub use shared::EditorOptions;
