//! Lazy sampling of a vector field over the domain grid.
//!
//! The sampler walks a rectangular lattice column by column (x outer, y
//! inner, both ascending) and yields one [`GridSample`] per point: the
//! field vector for the arrow overlay plus the local divergence and curl
//! scalars (the curl drives the rotation-marker animation). The iterator is
//! recreated on every call, so a tick can restart it freely.

use crate::error::LabError;
use crate::field::VectorField;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One lattice sample: position, field vector, and local differential
/// scalars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSample {
    pub position: DVec2,
    pub vector: DVec2,
    pub divergence: f64,
    pub curl: f64,
}

/// A rectangular sampling lattice over the domain.
///
/// The reference configuration spans `[-5, 5]` on both axes at spacing 1.0,
/// giving an 11 x 11 lattice with both endpoints included.
#[derive(Debug, Clone, Copy)]
pub struct GridSampler {
    x_min: f64,
    y_min: f64,
    spacing: f64,
    cols: usize,
    rows: usize,
}

impl GridSampler {
    /// Creates a sampler covering `x_range` x `y_range` at `spacing`.
    ///
    /// Endpoints are included; the point count per axis is rounded so a
    /// range that is an exact multiple of the spacing lands exactly on the
    /// far endpoint. Returns `LabError::InvalidSpacing` unless
    /// `spacing > 0`.
    pub fn new(
        x_range: (f64, f64),
        y_range: (f64, f64),
        spacing: f64,
    ) -> Result<Self, LabError> {
        if !(spacing > 0.0) {
            return Err(LabError::InvalidSpacing(spacing));
        }
        let span_count = |lo: f64, hi: f64| ((hi - lo).max(0.0) / spacing + 0.5).floor() as usize + 1;
        Ok(Self {
            x_min: x_range.0,
            y_min: y_range.0,
            spacing,
            cols: span_count(x_range.0, x_range.1),
            rows: span_count(y_range.0, y_range.1),
        })
    }

    /// Lattice columns (points along x).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Lattice rows (points along y).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of samples per pass.
    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    /// Whether the lattice is empty (never, for a validly constructed one).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazily samples `field` over the lattice.
    ///
    /// Each call returns a fresh iterator; nothing is cached between passes.
    pub fn samples<'f>(
        &self,
        field: &'f dyn VectorField,
    ) -> impl Iterator<Item = GridSample> + 'f {
        let grid = *self;
        (0..grid.cols).flat_map(move |ix| {
            (0..grid.rows).map(move |iy| {
                let position = DVec2::new(
                    grid.x_min + ix as f64 * grid.spacing,
                    grid.y_min + iy as f64 * grid.spacing,
                );
                GridSample {
                    position,
                    vector: field.evaluate(position),
                    divergence: field.divergence_at(position),
                    curl: field.curl_at(position),
                }
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Identity-like test field with simple closed forms.
    struct Radial;

    impl VectorField for Radial {
        fn evaluate(&self, p: DVec2) -> DVec2 {
            p
        }

        fn divergence_at(&self, _p: DVec2) -> f64 {
            2.0
        }

        fn curl_at(&self, _p: DVec2) -> f64 {
            0.0
        }
    }

    fn reference_grid() -> GridSampler {
        GridSampler::new((-5.0, 5.0), (-5.0, 5.0), 1.0).unwrap()
    }

    #[test]
    fn reference_lattice_is_11_by_11() {
        let grid = reference_grid();
        assert_eq!(grid.cols(), 11);
        assert_eq!(grid.rows(), 11);
        assert_eq!(grid.len(), 121);
        assert!(!grid.is_empty());
        assert_eq!(grid.samples(&Radial).count(), 121);
    }

    #[test]
    fn samples_walk_columns_first() {
        let grid = reference_grid();
        let first: Vec<GridSample> = grid.samples(&Radial).take(12).collect();
        // First column: x fixed at -5, y ascending.
        assert_eq!(first[0].position, DVec2::new(-5.0, -5.0));
        assert_eq!(first[1].position, DVec2::new(-5.0, -4.0));
        assert_eq!(first[10].position, DVec2::new(-5.0, 5.0));
        // Then the next column starts.
        assert_eq!(first[11].position, DVec2::new(-4.0, -5.0));
    }

    #[test]
    fn endpoints_are_included() {
        let grid = reference_grid();
        let last = grid.samples(&Radial).last().unwrap();
        assert_eq!(last.position, DVec2::new(5.0, 5.0));
    }

    #[test]
    fn samples_carry_field_values_and_scalars() {
        let grid = reference_grid();
        let sample = grid
            .samples(&Radial)
            .find(|s| s.position == DVec2::new(2.0, -3.0))
            .unwrap();
        assert_eq!(sample.vector, DVec2::new(2.0, -3.0));
        assert_eq!(sample.divergence, 2.0);
        assert_eq!(sample.curl, 0.0);
    }

    #[test]
    fn iterator_is_restartable() {
        let grid = reference_grid();
        let a: Vec<GridSample> = grid.samples(&Radial).collect();
        let b: Vec<GridSample> = grid.samples(&Radial).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn fractional_spacing_counts_points_correctly() {
        let grid = GridSampler::new((0.0, 1.0), (0.0, 1.0), 0.25).unwrap();
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.rows(), 5);
    }

    #[test]
    fn non_positive_spacing_fails_at_construction() {
        assert!(matches!(
            GridSampler::new((-5.0, 5.0), (-5.0, 5.0), 0.0),
            Err(LabError::InvalidSpacing(_))
        ));
        assert!(GridSampler::new((-5.0, 5.0), (-5.0, 5.0), -1.0).is_err());
    }

    #[test]
    fn grid_sample_round_trips_through_json() {
        let sample = GridSample {
            position: DVec2::new(1.0, -2.0),
            vector: DVec2::new(-1.0, 3.0),
            divergence: 5.0,
            curl: 1.0,
        };
        let json = serde_json::to_string(&sample).unwrap();
        let back: GridSample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample);
    }
}
