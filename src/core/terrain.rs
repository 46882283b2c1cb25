//! Hoehenprofil der Strecke (Distanz → Hoehe).

use anyhow::{bail, Result};

/// Distanzbereich ohne geladenes Terrain (Meter).
pub const DEFAULT_DISTANCE_RANGE: (f64, f64) = (0.0, 1000.0);

/// Geladenes Hoehenprofil; Stuetzstellen in Dateireihenfolge.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainProfile {
    distances: Vec<f64>,
    elevations: Vec<f64>,
}

impl TerrainProfile {
    /// Erstellt ein Profil aus `(Distanz, Hoehe)`-Paaren.
    pub fn from_samples(samples: Vec<(f64, f64)>) -> Result<Self> {
        if samples.is_empty() {
            bail!("Terrain enthaelt keine Stuetzstellen");
        }
        if let Some((index, _)) = samples
            .iter()
            .enumerate()
            .find(|(_, (d, e))| !d.is_finite() || !e.is_finite())
        {
            bail!("Terrain-Stuetzstelle {} ist nicht endlich", index + 1);
        }

        let (distances, elevations) = samples.into_iter().unzip();
        Ok(Self {
            distances,
            elevations,
        })
    }

    /// Anzahl der Stuetzstellen.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Immer `false`; ein leeres Profil wird beim Erstellen abgelehnt.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Iterator ueber `(Distanz, Hoehe)`.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.distances
            .iter()
            .copied()
            .zip(self.elevations.iter().copied())
    }

    /// `(min, max)` der Distanzen.
    pub fn distance_range(&self) -> (f64, f64) {
        min_max(&self.distances)
    }

    /// `(min, max)` der Hoehen.
    pub fn elevation_range(&self) -> (f64, f64) {
        min_max(&self.elevations)
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_cover_all_samples() {
        let terrain =
            TerrainProfile::from_samples(vec![(0.0, 12.0), (50.0, 8.5), (120.0, 20.0)])
                .expect("gueltiges Terrain");

        assert_eq!(terrain.len(), 3);
        assert_eq!(terrain.distance_range(), (0.0, 120.0));
        assert_eq!(terrain.elevation_range(), (8.5, 20.0));
    }

    #[test]
    fn empty_terrain_is_rejected() {
        assert!(TerrainProfile::from_samples(Vec::new()).is_err());
    }

    #[test]
    fn non_finite_sample_is_rejected() {
        let err = TerrainProfile::from_samples(vec![(0.0, 1.0), (f64::NAN, 2.0)])
            .expect_err("NaN muss abgelehnt werden");
        assert!(err.to_string().contains('2'));
    }
}
