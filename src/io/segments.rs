//! Writer fuer die exportierte Segment-Tabelle.

use crate::core::SegmentRecord;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Kopfzeile der Export-Datei (exakt drei Spalten).
pub const SEGMENT_HEADER: [&str; 3] = [
    "Initial Speed (m/s)",
    "Final Speed (m/s)",
    "Distance Traveled (m)",
];

/// Schreibt Kopfzeile und eine Zeile pro Segment.
///
/// Zahlen werden mit der kuerzesten verlustfreien `f64`-Darstellung geschrieben.
pub fn write_segments<W: Write>(records: &[SegmentRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(SEGMENT_HEADER)?;

    for record in records {
        csv_writer.write_record([
            record.initial_speed.to_string(),
            record.final_speed.to_string(),
            record.distance.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Speichert die Segment-Tabelle unter `path` (ueberschreibt bestehende Dateien).
pub fn save_segments(path: &Path, records: &[SegmentRecord]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Export-Datei nicht beschreibbar: {}", path.display()))?;
    write_segments(records, std::io::BufWriter::new(file))
        .with_context(|| format!("Fehler beim Schreiben von {}", path.display()))?;

    log::info!(
        "{} Segmente gespeichert nach {}",
        records.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_rows() {
        let records = vec![
            SegmentRecord {
                initial_speed: 0.0,
                final_speed: 10.0,
                distance: 10.0,
            },
            SegmentRecord {
                initial_speed: 10.0,
                final_speed: 2.5,
                distance: 0.125,
            },
        ];

        let mut buffer = Vec::new();
        write_segments(&records, &mut buffer).expect("Schreiben erwartet");
        let text = String::from_utf8(buffer).expect("UTF-8");

        assert_eq!(
            text,
            "Initial Speed (m/s),Final Speed (m/s),Distance Traveled (m)\n\
             0,10,10\n\
             10,2.5,0.125\n"
        );
    }

    #[test]
    fn keeps_full_precision() {
        let records = vec![SegmentRecord {
            initial_speed: 1.0 / 3.0,
            final_speed: 7.123_456_789_012_345,
            distance: 0.1 + 0.2,
        }];

        let mut buffer = Vec::new();
        write_segments(&records, &mut buffer).expect("Schreiben erwartet");
        let text = String::from_utf8(buffer).expect("UTF-8");
        let row: Vec<f64> = text
            .lines()
            .nth(1)
            .expect("Datenzeile")
            .split(',')
            .map(|v| v.parse().expect("Zahl"))
            .collect();

        assert_eq!(row, vec![1.0 / 3.0, 7.123_456_789_012_345, 0.1 + 0.2]);
    }
}
