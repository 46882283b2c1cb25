//! Spatial-Index (KD-Tree) fuer Hit-Tests im (Distanz, Geschwindigkeit)-Raum.

use kiddo::{KdTree, SquaredEuclidean};
use std::collections::HashSet;

use super::control_point::ControlPoint;
use super::profile::PointId;

/// Ergebnis einer Naechster-Punkt-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Punkts
    pub point_id: PointId,
    /// Quadrierte Distanz in gemischten Einheiten (m und m/s, nicht normalisiert)
    pub distance_sq: f64,
}

/// Read-only Spatial-Index ueber allen Kontrollpunkten eines Profils.
///
/// Wird nach jeder Mutation komplett neu gebaut; Profile haben selten mehr
/// als einige hundert Punkte.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    point_ids: Vec<PointId>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            point_ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus `(ID, Punkt)`-Paaren.
    ///
    /// Identische Koordinaten werden nur einmal eingefuegt (erste ID gewinnt),
    /// da kiddo hoechstens eine Bucket-Groesse gleicher Punkte aufnehmen kann.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = (PointId, &'a ControlPoint)>,
    {
        let mut seen = HashSet::new();
        let (point_ids, entries): (Vec<PointId>, Vec<[f64; 2]>) = points
            .into_iter()
            .map(|(id, point)| (id, [point.position, point.speed]))
            .filter(|(_, coords)| seen.insert(coordinate_key(*coords)))
            .unzip();

        let tree: KdTree<f64, 2> = (&entries).into();

        Self { tree, point_ids }
    }

    /// Gibt die Anzahl indexierter (unterschiedlicher) Koordinaten zurueck.
    pub fn len(&self) -> usize {
        self.point_ids.len()
    }

    /// Gibt `true` zurueck, wenn keine Punkte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.point_ids.is_empty()
    }

    /// Findet den naechsten Punkt zur Abfrage `(position, speed)`.
    pub fn nearest(&self, position: f64, speed: f64) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[position, speed]);
        let point_id = *self.point_ids.get(result.item as usize)?;

        Some(SpatialMatch {
            point_id,
            distance_sq: result.distance,
        })
    }
}

/// Bit-Schluessel einer Koordinate; `-0.0` und `0.0` fallen zusammen.
fn coordinate_key(coords: [f64; 2]) -> [u64; 2] {
    coords.map(|v| (v + 0.0).to_bits())
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}
