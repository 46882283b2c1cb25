//! Abgeleitete Kennzahlen: Gesamtfahrzeit und Segment-Tabelle.

use serde::Serialize;

use super::control_point::ControlPoint;

/// Ein Segment zwischen zwei benachbarten Kontrollpunkten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentRecord {
    /// Geschwindigkeit am Segmentanfang (m/s)
    pub initial_speed: f64,
    /// Geschwindigkeit am Segmentende (m/s)
    pub final_speed: f64,
    /// Segmentlaenge (m)
    pub distance: f64,
}

/// Zwischengespeicherte Kennzahlen, nach jeder Mutation neu berechnet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProfileMetrics {
    /// Gesamtfahrzeit in Sekunden
    pub total_time: f64,
    /// Anzahl exportierbarer Segmente
    pub segment_count: usize,
}

impl ProfileMetrics {
    /// Berechnet die Kennzahlen fuer einen sortierten Snapshot.
    pub fn compute(snapshot: &[ControlPoint]) -> Self {
        Self {
            total_time: total_transit_time(snapshot),
            segment_count: snapshot.len().saturating_sub(1),
        }
    }
}

/// Summiert `distance / mittlere Geschwindigkeit` ueber alle Nachbarpaare.
///
/// Segmente mit Anfangs- und Endgeschwindigkeit exakt 0 tragen nichts bei.
/// Negative Distanzen werden nicht geprueft; der Snapshot muss sortiert sein.
pub fn total_transit_time(snapshot: &[ControlPoint]) -> f64 {
    snapshot
        .windows(2)
        .filter(|pair| !(pair[0].speed == 0.0 && pair[1].speed == 0.0))
        .map(|pair| {
            let distance = pair[1].position - pair[0].position;
            let average_speed = (pair[0].speed + pair[1].speed) / 2.0;
            distance / average_speed
        })
        .sum()
}

/// Baut die Segment-Tabelle. Weniger als zwei Punkte ergeben eine leere Tabelle.
pub fn export_segments(snapshot: &[ControlPoint]) -> Vec<SegmentRecord> {
    snapshot
        .windows(2)
        .map(|pair| SegmentRecord {
            initial_speed: pair[0].speed,
            final_speed: pair[1].speed,
            distance: pair[1].position - pair[0].position,
        })
        .collect()
}

/// Anzeigetext fuer die Gesamtfahrzeit.
pub fn format_total_time(seconds: f64) -> String {
    format!("Total Time: {:.2} seconds", seconds)
}
