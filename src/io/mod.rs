//! CSV Import/Export.
//!
//! - `terrain` liest das Hoehenprofil (zwei Spalten, ohne Kopfzeile)
//! - `segments` schreibt die Segment-Tabelle des Geschwindigkeitsprofils

pub mod segments;
pub mod terrain;

pub use segments::{save_segments, write_segments, SEGMENT_HEADER};
pub use terrain::{load_terrain, parse_terrain_csv};
