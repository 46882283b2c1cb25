//! Kontrollpunkt des Geschwindigkeitsprofils und Geschwindigkeitsgrenzen.

use serde::{Deserialize, Serialize};

/// Standard-Untergrenze der Geschwindigkeit in m/s.
pub const MIN_SPEED: f64 = 0.0;
/// Standard-Obergrenze der Geschwindigkeit in m/s.
pub const MAX_SPEED: f64 = 15.0;

/// Vom Nutzer gesetzter Stuetzpunkt `(Distanz, Geschwindigkeit)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Position entlang der Strecke in Metern (unbeschraenkt)
    pub position: f64,
    /// Geschwindigkeit in m/s, immer innerhalb der aktiven `SpeedLimits`
    pub speed: f64,
}

impl ControlPoint {
    /// Erstellt einen Punkt ohne Clamping. Das Modell clampt beim Einfuegen.
    pub fn new(position: f64, speed: f64) -> Self {
        Self { position, speed }
    }
}

/// Erlaubter Geschwindigkeitsbereich `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedLimits {
    /// Untergrenze in m/s
    pub min: f64,
    /// Obergrenze in m/s
    pub max: f64,
}

impl SpeedLimits {
    /// Erstellt Grenzen; vertauschte Werte werden sortiert, nicht-endliche verworfen.
    pub fn new(min: f64, max: f64) -> Self {
        if !min.is_finite() || !max.is_finite() {
            log::warn!(
                "Ungueltige Geschwindigkeitsgrenzen ({}, {}), verwende Standardwerte",
                min,
                max
            );
            return Self::default();
        }
        if min <= max {
            Self { min, max }
        } else {
            log::warn!(
                "Geschwindigkeitsgrenzen vertauscht ({} > {}), korrigiere",
                min,
                max
            );
            Self { min: max, max: min }
        }
    }

    /// Begrenzt eine rohe Geschwindigkeit auf den Bereich.
    pub fn clamp(&self, speed: f64) -> f64 {
        speed.clamp(self.min, self.max)
    }

    /// Breite des Bereichs in m/s.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for SpeedLimits {
    fn default() -> Self {
        Self {
            min: MIN_SPEED,
            max: MAX_SPEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limits_speed_to_range() {
        let limits = SpeedLimits::default();
        assert_eq!(limits.clamp(-3.0), 0.0);
        assert_eq!(limits.clamp(7.5), 7.5);
        assert_eq!(limits.clamp(40.0), 15.0);
    }

    #[test]
    fn swapped_limits_are_reordered() {
        let limits = SpeedLimits::new(20.0, 5.0);
        assert_eq!(limits.min, 5.0);
        assert_eq!(limits.max, 20.0);
        assert_eq!(limits.span(), 15.0);
    }
}
