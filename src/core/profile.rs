//! Das Geschwindigkeitsprofil: sortierte Kontrollpunkte mit Hit-Test und Drag-Lifecycle.

use super::control_point::{ControlPoint, SpeedLimits};
use super::spatial::SpatialIndex;

/// Standard-Trefferradius fuer Hit-Tests (gemischte Einheiten m / m/s).
pub const DEFAULT_HIT_THRESHOLD: f64 = 2.5;

/// Stabile Identitaet eines Kontrollpunkts.
///
/// Der Index im Profil aendert sich bei jedem Umsortieren, die ID nicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(u64);

impl PointId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Rohwert der ID (nur fuer Logging/Anzeige).
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Schreibzugriff auf genau einen Punkt fuer die Dauer einer Drag-Geste.
///
/// Nicht `Clone`: `end_drag` verbraucht das Handle, danach ist kein Update mehr moeglich.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "ein Drag-Handle muss mit `end_drag` beendet werden"]
pub struct DragHandle {
    point_id: PointId,
}

impl DragHandle {
    /// ID des gezogenen Punkts.
    pub fn point_id(&self) -> PointId {
        self.point_id
    }
}

/// Sortierte Folge von Kontrollpunkten.
///
/// Invariante: `points` ist nach jeder Mutation aufsteigend nach `position`
/// sortiert (stabil, Gleichstand behaelt Einfuegereihenfolge). `ids` laeuft
/// parallel zu `points`.
#[derive(Debug, Clone)]
pub struct ProfileModel {
    points: Vec<ControlPoint>,
    ids: Vec<PointId>,
    next_id: u64,
    limits: SpeedLimits,
    hit_threshold: f64,
    spatial_index: SpatialIndex,
}

impl ProfileModel {
    /// Erstellt ein leeres Profil mit Standardgrenzen (0..=15 m/s) und Radius 2.5.
    pub fn new() -> Self {
        Self::with_settings(SpeedLimits::default(), DEFAULT_HIT_THRESHOLD)
    }

    /// Erstellt ein leeres Profil mit eigenen Grenzen und Trefferradius.
    pub fn with_settings(limits: SpeedLimits, hit_threshold: f64) -> Self {
        Self {
            points: Vec::new(),
            ids: Vec::new(),
            next_id: 1,
            limits,
            hit_threshold,
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Fuegt einen Punkt hinzu (Geschwindigkeit wird geclampt) und sortiert neu.
    pub fn add(&mut self, position: f64, speed_raw: f64) -> PointId {
        let id = PointId::from_raw(self.next_id);
        self.next_id += 1;

        let point = ControlPoint::new(position, self.limits.clamp(speed_raw));
        self.points.push(point);
        self.ids.push(id);
        self.resort();

        log::debug!(
            "Punkt {} hinzugefuegt bei ({:.2} m, {:.2} m/s)",
            id.raw(),
            point.position,
            point.speed
        );
        id
    }

    /// Index des naechsten Punkts, falls dessen quadrierte Distanz `< threshold²` ist.
    ///
    /// Die Distanz wird ohne Achsen-Normalisierung in (m, m/s) gemessen.
    pub fn find_nearest(&self, position: f64, speed: f64, threshold: f64) -> Option<usize> {
        let hit = self.spatial_index.nearest(position, speed)?;
        if hit.distance_sq < threshold * threshold {
            self.index_of_id(hit.point_id)
        } else {
            None
        }
    }

    /// Startet einen Drag auf dem naechsten Punkt (Standard-Radius).
    ///
    /// `None` bedeutet: kein Punkt in Reichweite. Was dann passiert (z.B. neuen
    /// Punkt anlegen), entscheidet der Aufrufer.
    pub fn begin_drag(&self, position: f64, speed: f64) -> Option<DragHandle> {
        let index = self.find_nearest(position, speed, self.hit_threshold)?;
        let point_id = self.ids[index];
        log::debug!("Drag gestartet fuer Punkt {}", point_id.raw());
        Some(DragHandle { point_id })
    }

    /// Setzt Position und geclampte Geschwindigkeit des gezogenen Punkts.
    ///
    /// Gibt `false` zurueck, wenn der Punkt nicht mehr existiert (z.B. nach `clear`).
    pub fn update_drag(&mut self, handle: &DragHandle, position: f64, speed_raw: f64) -> bool {
        let Some(index) = self.index_of_id(handle.point_id) else {
            log::warn!(
                "Drag-Update ignoriert: Punkt {} existiert nicht mehr",
                handle.point_id.raw()
            );
            return false;
        };

        self.points[index] = ControlPoint::new(position, self.limits.clamp(speed_raw));
        self.resort();
        true
    }

    /// Beendet einen Drag. Der Punkt behaelt den zuletzt gesetzten Wert.
    pub fn end_drag(&mut self, handle: DragHandle) {
        log::debug!("Drag beendet fuer Punkt {}", handle.point_id.raw());
    }

    /// Entfernt den naechsten Punkt innerhalb von `threshold`.
    pub fn remove_nearest(&mut self, position: f64, speed: f64, threshold: f64) -> bool {
        let Some(index) = self.find_nearest(position, speed, threshold) else {
            return false;
        };

        let removed = self.points.remove(index);
        let id = self.ids.remove(index);
        self.resort();

        log::debug!(
            "Punkt {} entfernt ({:.2} m, {:.2} m/s)",
            id.raw(),
            removed.position,
            removed.speed
        );
        true
    }

    /// Entfernt alle Punkte. Offene Drag-Handles laufen danach ins Leere.
    pub fn clear(&mut self) {
        self.points.clear();
        self.ids.clear();
        self.spatial_index = SpatialIndex::empty();
    }

    /// Sortierte, read-only Sicht auf alle Punkte.
    pub fn snapshot(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Aktueller Index des Punkts hinter einem Drag-Handle.
    pub fn index_of(&self, handle: &DragHandle) -> Option<usize> {
        self.index_of_id(handle.point_id)
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true`, wenn das Profil keine Punkte enthaelt.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Aktive Geschwindigkeitsgrenzen.
    pub fn limits(&self) -> SpeedLimits {
        self.limits
    }

    fn index_of_id(&self, id: PointId) -> Option<usize> {
        self.ids.iter().position(|candidate| *candidate == id)
    }

    /// Stabile Sortierung nach Position (IDs laufen mit), danach Index-Neuaufbau.
    fn resort(&mut self) {
        let mut order: Vec<usize> = (0..self.points.len()).collect();
        order.sort_by(|&a, &b| self.points[a].position.total_cmp(&self.points[b].position));

        self.points = order.iter().map(|&i| self.points[i]).collect();
        self.ids = order.iter().map(|&i| self.ids[i]).collect();
        self.rebuild_spatial_index();
    }

    fn rebuild_spatial_index(&mut self) {
        self.spatial_index =
            SpatialIndex::from_points(self.ids.iter().copied().zip(self.points.iter()));
    }
}

impl Default for ProfileModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(model: &ProfileModel) -> Vec<f64> {
        model.snapshot().iter().map(|p| p.position).collect()
    }

    fn assert_sorted(model: &ProfileModel) {
        assert!(
            model
                .snapshot()
                .windows(2)
                .all(|w| w[0].position <= w[1].position),
            "Profil nicht sortiert: {:?}",
            positions(model)
        );
    }

    #[test]
    fn add_keeps_points_sorted_by_position() {
        let mut model = ProfileModel::new();
        model.add(20.0, 5.0);
        model.add(0.0, 1.0);
        model.add(10.0, 3.0);

        assert_eq!(positions(&model), vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn add_clamps_speed_into_limits() {
        let mut model = ProfileModel::new();
        model.add(0.0, -4.0);
        model.add(5.0, 99.0);

        assert_eq!(model.snapshot()[0].speed, 0.0);
        assert_eq!(model.snapshot()[1].speed, 15.0);
    }

    #[test]
    fn add_accepts_positions_outside_any_range() {
        let mut model = ProfileModel::new();
        model.add(-250.0, 3.0);

        assert_eq!(model.snapshot()[0].position, -250.0);
    }

    #[test]
    fn equal_positions_keep_insertion_order() {
        let mut model = ProfileModel::new();
        model.add(5.0, 1.0);
        model.add(5.0, 2.0);
        model.add(0.0, 9.0);

        let speeds: Vec<f64> = model.snapshot().iter().map(|p| p.speed).collect();
        assert_eq!(speeds, vec![9.0, 1.0, 2.0]);
    }

    #[test]
    fn find_nearest_hits_within_threshold_only() {
        let mut model = ProfileModel::new();
        model.add(5.0, 5.0);
        assert_eq!(model.find_nearest(5.0, 5.0, 2.5), Some(0));

        let mut far = ProfileModel::new();
        far.add(10.0, 10.0);
        assert_eq!(far.find_nearest(5.0, 5.0, 2.5), None);
    }

    #[test]
    fn find_nearest_boundary_is_exclusive() {
        let mut model = ProfileModel::new();
        model.add(0.0, 0.0);

        // Distanz exakt 2.5 → kein Treffer
        assert_eq!(model.find_nearest(2.5, 0.0, 2.5), None);
        assert_eq!(model.find_nearest(2.4, 0.0, 2.5), Some(0));
    }

    #[test]
    fn find_nearest_on_empty_model_is_none() {
        let model = ProfileModel::new();
        assert_eq!(model.find_nearest(0.0, 0.0, 100.0), None);
    }

    #[test]
    fn find_nearest_returns_sorted_index() {
        let mut model = ProfileModel::new();
        model.add(30.0, 5.0);
        model.add(10.0, 5.0);
        model.add(20.0, 5.0);

        assert_eq!(model.find_nearest(29.5, 5.0, 2.5), Some(2));
        assert_eq!(model.find_nearest(10.2, 5.5, 2.5), Some(0));
    }

    #[test]
    fn drag_follows_same_point_across_reorder() {
        let mut model = ProfileModel::new();
        model.add(0.0, 2.0);
        model.add(10.0, 8.0);
        model.add(20.0, 4.0);

        let handle = model.begin_drag(0.2, 2.1).expect("Punkt bei 0 erwartet");

        // Ueber den Nachbarn bei 10 hinweg ziehen
        assert!(model.update_drag(&handle, 12.0, 2.0));
        assert_eq!(model.index_of(&handle), Some(1));
        assert!(model.update_drag(&handle, 25.0, 3.0));
        assert_eq!(model.index_of(&handle), Some(2));

        model.end_drag(handle);

        assert_eq!(positions(&model), vec![10.0, 20.0, 25.0]);
        let speeds: Vec<f64> = model.snapshot().iter().map(|p| p.speed).collect();
        assert_eq!(speeds, vec![8.0, 4.0, 3.0]);
    }

    #[test]
    fn update_drag_clamps_speed() {
        let mut model = ProfileModel::new();
        model.add(0.0, 5.0);
        let handle = model.begin_drag(0.0, 5.0).expect("Treffer erwartet");

        model.update_drag(&handle, 1.0, 42.0);
        assert_eq!(model.snapshot()[0].speed, 15.0);
        model.update_drag(&handle, 1.0, -1.0);
        assert_eq!(model.snapshot()[0].speed, 0.0);
        model.end_drag(handle);
    }

    #[test]
    fn begin_drag_misses_far_points() {
        let mut model = ProfileModel::new();
        model.add(0.0, 0.0);

        assert!(model.begin_drag(50.0, 10.0).is_none());
    }

    #[test]
    fn update_drag_after_clear_is_noop() {
        let mut model = ProfileModel::new();
        model.add(0.0, 5.0);
        let handle = model.begin_drag(0.0, 5.0).expect("Treffer erwartet");

        model.clear();
        assert!(!model.update_drag(&handle, 3.0, 3.0));
        assert!(model.is_empty());
        model.end_drag(handle);
    }

    #[test]
    fn remove_nearest_deletes_hit_and_reports_result() {
        let mut model = ProfileModel::new();
        model.add(0.0, 0.0);
        model.add(10.0, 10.0);
        model.add(20.0, 10.0);

        assert!(model.remove_nearest(10.5, 9.5, 2.5));
        assert_eq!(positions(&model), vec![0.0, 20.0]);
        assert!(!model.remove_nearest(10.5, 9.5, 2.5));
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn clear_empties_model() {
        let mut model = ProfileModel::new();
        model.add(1.0, 1.0);
        model.add(2.0, 2.0);

        model.clear();

        assert!(model.is_empty());
        assert!(model.snapshot().is_empty());
        assert_eq!(model.find_nearest(1.0, 1.0, 2.5), None);
    }

    #[test]
    fn many_points_dragged_onto_clamped_corner() {
        let mut model = ProfileModel::new();
        for i in 0..40 {
            model.add(10.0 * (i + 1) as f64, 15.0);
        }

        for i in 0..40 {
            let position = 10.0 * (i + 1) as f64;
            let handle = model
                .begin_drag(position, 15.0)
                .expect("Punkt an urspruenglicher Position erwartet");
            assert!(model.update_drag(&handle, 0.0, 99.0));
            model.end_drag(handle);
        }

        assert_eq!(model.len(), 40);
        assert!(model
            .snapshot()
            .iter()
            .all(|p| p.position == 0.0 && p.speed == 15.0));
        assert_eq!(model.find_nearest(0.3, 14.8, 2.5), Some(0));

        for remaining in (0..40).rev() {
            assert!(model.remove_nearest(0.0, 15.0, 2.5));
            assert_eq!(model.len(), remaining);
        }
    }

    #[test]
    fn identical_points_stay_sorted_and_hittable() {
        let mut model = ProfileModel::new();
        for _ in 0..40 {
            model.add(100.0, 20.0);
        }
        model.add(50.0, 5.0);

        assert_sorted(&model);
        assert_eq!(model.snapshot()[1], ControlPoint::new(100.0, 15.0));
        assert_eq!(model.find_nearest(100.0, 15.0, 2.5), Some(1));

        // Ein Punkt vom Stapel laesst sich wegziehen
        let handle = model.begin_drag(100.0, 15.0).expect("Treffer erwartet");
        assert!(model.update_drag(&handle, 200.0, 7.0));
        model.end_drag(handle);

        assert_eq!(model.len(), 41);
        assert_eq!(model.snapshot()[40], ControlPoint::new(200.0, 7.0));
        assert_eq!(model.find_nearest(100.0, 15.0, 2.5), Some(1));
    }

    #[test]
    fn mixed_operations_preserve_sort_invariant() {
        let mut model = ProfileModel::new();
        let inputs = [
            (40.0, 3.0),
            (5.0, 12.0),
            (22.5, 7.0),
            (5.0, 1.0),
            (-3.0, 20.0),
            (61.0, -2.0),
        ];

        for (position, speed) in inputs {
            model.add(position, speed);
            assert_sorted(&model);
        }

        let handle = model.begin_drag(22.5, 7.0).expect("Treffer erwartet");
        for step in 0..10 {
            model.update_drag(&handle, 22.5 + step as f64 * 5.0, 7.0);
            assert_sorted(&model);
        }
        model.end_drag(handle);

        assert!(model.remove_nearest(5.0, 12.0, 2.5));
        assert_sorted(&model);
        assert!(model
            .snapshot()
            .iter()
            .all(|p| (0.0..=15.0).contains(&p.speed)));
    }
}
