//! Handler fuer das Bearbeiten der Kontrollpunkte.

use crate::app::use_cases;
use crate::app::AppState;

/// Greift einen vorhandenen Punkt oder setzt einen neuen.
pub fn begin_drag_or_add(state: &mut AppState, position: f64, speed: f64) {
    use_cases::editing::begin_drag_or_add_point(state, position, speed);
}

/// Verschiebt den gezogenen Punkt.
pub fn update_drag(state: &mut AppState, position: f64, speed: f64) {
    use_cases::editing::update_drag(state, position, speed);
}

/// Beendet den aktiven Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::editing::end_drag(state);
}

/// Entfernt den naechsten Punkt.
pub fn remove_nearest(state: &mut AppState, position: f64, speed: f64, threshold: f64) {
    use_cases::editing::remove_nearest_point(state, position, speed, threshold);
}

/// Entfernt alle Punkte.
pub fn clear(state: &mut AppState) {
    use_cases::editing::clear_points(state);
}
