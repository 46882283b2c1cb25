//! Achsen des Plots: Umrechnung Screen ↔ Daten fuer Geschwindigkeits- und Hoehenachse.

use glam::{DVec2, Vec2};

use super::control_point::SpeedLimits;
use super::terrain::{TerrainProfile, DEFAULT_DISTANCE_RANGE};

/// Relativer Rand oberhalb/unterhalb der Hoehenkurve.
const ELEVATION_MARGIN: f64 = 0.05;

/// Geschlossener Wertebereich einer Achse mit `max > min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Untere Grenze
    pub min: f64,
    /// Obere Grenze
    pub max: f64,
}

impl AxisRange {
    /// Erstellt einen Bereich; leere oder ungueltige Bereiche werden um ±1 aufgeweitet.
    pub fn new(min: f64, max: f64) -> Self {
        if !min.is_finite() || !max.is_finite() {
            return Self { min: 0.0, max: 1.0 };
        }
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        if max - min <= f64::EPSILON {
            Self {
                min: min - 1.0,
                max: max + 1.0,
            }
        } else {
            Self { min, max }
        }
    }

    /// Breite des Bereichs.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Relativer Anteil eines Werts im Bereich (0 = min, 1 = max, nicht geclampt).
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    /// Umkehrung von `normalize`.
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + t * self.span()
    }

    /// Bereich mit relativem Rand an beiden Seiten.
    pub fn padded(&self, fraction: f64) -> Self {
        let pad = self.span() * fraction;
        Self::new(self.min - pad, self.max + pad)
    }

    /// Achsenbeschriftungen mit "runden" Schrittweiten (1, 2, 5 × 10^n).
    pub fn ticks(&self, target_count: usize) -> Vec<f64> {
        let target = target_count.max(1) as f64;
        let raw_step = self.span() / target;
        let magnitude = 10f64.powf(raw_step.log10().floor());
        let step = [1.0, 2.0, 5.0, 10.0]
            .iter()
            .map(|m| m * magnitude)
            .find(|candidate| *candidate >= raw_step)
            .unwrap_or(10.0 * magnitude);

        let first = (self.min / step).ceil() as i64;
        let last = (self.max / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Rechteck des Plotbereichs in Screen-Koordinaten (y waechst nach unten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotViewport {
    /// Linke obere Ecke
    pub origin: Vec2,
    /// Breite und Hoehe in Pixeln
    pub size: Vec2,
}

impl PlotViewport {
    /// Erstellt einen Viewport; Groessen werden auf mindestens 1 Pixel gehoben.
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self {
            origin,
            size: size.max(Vec2::ONE),
        }
    }
}

/// Gemeinsame Distanzachse plus zwei y-Achsen (Hoehe links, Geschwindigkeit rechts).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotAxes {
    /// Distanz in Metern (x)
    pub distance: AxisRange,
    /// Geschwindigkeit in m/s (rechte y-Achse, fest auf die Grenzen)
    pub speed: AxisRange,
    /// Hoehe in Metern (linke y-Achse)
    pub elevation: AxisRange,
}

impl PlotAxes {
    /// Leitet die Achsen aus Terrain und Geschwindigkeitsgrenzen ab.
    pub fn for_terrain(terrain: Option<&TerrainProfile>, limits: SpeedLimits) -> Self {
        let (distance, elevation) = match terrain {
            Some(terrain) => {
                let (d_min, d_max) = terrain.distance_range();
                let (e_min, e_max) = terrain.elevation_range();
                (
                    AxisRange::new(d_min, d_max),
                    AxisRange::new(e_min, e_max).padded(ELEVATION_MARGIN),
                )
            }
            None => (
                AxisRange::new(DEFAULT_DISTANCE_RANGE.0, DEFAULT_DISTANCE_RANGE.1),
                AxisRange::new(0.0, 1.0),
            ),
        };

        Self {
            distance,
            speed: AxisRange::new(limits.min, limits.max),
            elevation,
        }
    }

    /// Datenpunkt `(Distanz, Geschwindigkeit)` → Screen.
    pub fn speed_to_screen(&self, data: DVec2, viewport: PlotViewport) -> Vec2 {
        to_screen(self.distance, self.speed, data, viewport)
    }

    /// Datenpunkt `(Distanz, Hoehe)` → Screen.
    pub fn elevation_to_screen(&self, data: DVec2, viewport: PlotViewport) -> Vec2 {
        to_screen(self.distance, self.elevation, data, viewport)
    }

    /// Screen → `(Distanz, Geschwindigkeit)`; Werte ausserhalb der Achsen sind erlaubt.
    pub fn screen_to_speed(&self, screen_pos: Vec2, viewport: PlotViewport) -> DVec2 {
        let local = (screen_pos - viewport.origin) / viewport.size;
        DVec2::new(
            self.distance.lerp(local.x as f64),
            self.speed.lerp(1.0 - local.y as f64),
        )
    }
}

fn to_screen(x_axis: AxisRange, y_axis: AxisRange, data: DVec2, viewport: PlotViewport) -> Vec2 {
    let t = DVec2::new(x_axis.normalize(data.x), 1.0 - y_axis.normalize(data.y));
    viewport.origin + t.as_vec2() * viewport.size
}
