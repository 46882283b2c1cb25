//! Use-Cases fuer das Bearbeiten des Geschwindigkeitsprofils.
//!
//! Jede Mutation endet mit `refresh_metrics`, damit die angezeigte
//! Gesamtfahrzeit nie hinter dem Modell zurueckliegt.

use crate::app::AppState;

/// Greift den Punkt unter dem Zeiger oder setzt einen neuen Punkt.
///
/// Beim Setzen startet kein Drag; erst ein weiterer Klick greift den Punkt.
pub fn begin_drag_or_add_point(state: &mut AppState, position: f64, speed: f64) {
    if let Some(handle) = state.editor.profile.begin_drag(position, speed) {
        state.editor.drag = Some(handle);
        return;
    }

    state.editor.profile.add(position, speed);
    state.editor.refresh_metrics();
}

/// Verschiebt den gezogenen Punkt.
///
/// Existiert der Punkt nicht mehr (z.B. per Rechtsklick entfernt), wird der Drag verworfen.
pub fn update_drag(state: &mut AppState, position: f64, speed: f64) {
    let Some(handle) = state.editor.drag.as_ref() else {
        return;
    };

    if !state.editor.profile.update_drag(handle, position, speed) {
        end_drag(state);
        return;
    }
    state.editor.refresh_metrics();
}

/// Beendet den aktiven Drag. Kein Rueckstellen auf den Ausgangswert.
pub fn end_drag(state: &mut AppState) {
    if let Some(handle) = state.editor.drag.take() {
        state.editor.profile.end_drag(handle);
    }
}

/// Entfernt den naechsten Punkt innerhalb von `threshold`.
pub fn remove_nearest_point(state: &mut AppState, position: f64, speed: f64, threshold: f64) {
    if state
        .editor
        .profile
        .remove_nearest(position, speed, threshold)
    {
        state.editor.refresh_metrics();
    } else {
        log::debug!(
            "Kein Punkt in Reichweite bei ({:.2} m, {:.2} m/s)",
            position,
            speed
        );
    }
}

/// Entfernt alle Punkte.
pub fn clear_points(state: &mut AppState) {
    end_drag(state);
    state.editor.profile.clear();
    state.editor.refresh_metrics();
    log::info!("All points cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn press_on_empty_canvas_adds_point_without_drag() {
        let mut state = AppState::new();

        begin_drag_or_add_point(&mut state, 10.0, 20.0);

        assert_eq!(state.point_count(), 1);
        assert_eq!(state.editor.profile.snapshot()[0].speed, 15.0);
        assert!(!state.editor.is_dragging());
    }

    #[test]
    fn press_on_existing_point_starts_drag() {
        let mut state = AppState::new();
        begin_drag_or_add_point(&mut state, 10.0, 5.0);

        begin_drag_or_add_point(&mut state, 10.5, 5.5);

        assert_eq!(state.point_count(), 1);
        assert!(state.editor.is_dragging());
    }

    #[test]
    fn drag_updates_metrics_on_every_sample() {
        let mut state = AppState::new();
        begin_drag_or_add_point(&mut state, 0.0, 10.0);
        begin_drag_or_add_point(&mut state, 10.0, 10.0);
        assert_relative_eq!(state.editor.metrics.total_time, 1.0);

        begin_drag_or_add_point(&mut state, 10.0, 10.0);
        update_drag(&mut state, 20.0, 10.0);
        assert_relative_eq!(state.editor.metrics.total_time, 2.0);
        update_drag(&mut state, 30.0, 10.0);
        assert_relative_eq!(state.editor.metrics.total_time, 3.0);

        end_drag(&mut state);
        assert!(!state.editor.is_dragging());
    }

    #[test]
    fn drag_of_removed_point_is_dropped() {
        let mut state = AppState::new();
        begin_drag_or_add_point(&mut state, 0.0, 5.0);
        begin_drag_or_add_point(&mut state, 0.0, 5.0);
        assert!(state.editor.is_dragging());

        remove_nearest_point(&mut state, 0.0, 5.0, 2.5);
        update_drag(&mut state, 4.0, 4.0);

        assert!(!state.editor.is_dragging());
        assert_eq!(state.point_count(), 0);
    }

    #[test]
    fn clear_resets_points_drag_and_metrics() {
        let mut state = AppState::new();
        begin_drag_or_add_point(&mut state, 0.0, 5.0);
        begin_drag_or_add_point(&mut state, 50.0, 5.0);
        begin_drag_or_add_point(&mut state, 50.0, 5.0);

        clear_points(&mut state);

        assert_eq!(state.point_count(), 0);
        assert!(!state.editor.is_dragging());
        assert_eq!(state.editor.metrics.total_time, 0.0);
        assert_eq!(state.editor.metrics.segment_count, 0);
    }
}
