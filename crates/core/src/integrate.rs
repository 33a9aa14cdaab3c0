//! Discretized boundary integrals and their Green's-theorem predictions.
//!
//! Circulation is a left-Riemann approximation to the closed line integral
//! ∮F·ds along the region boundary; boundary flux is the matching
//! outward-normal sum ∮F·n̂ ds. Both are intentionally crude (no midpoint or
//! Simpson refinement) and tighten monotonically as `steps_per_edge` grows.
//! The predictions (`curl(center)·area`, `div(center)·area`) are teaching
//! cross-checks, not second integration algorithms: they diverge from the
//! sums for large regions or strongly varying fields, and that mismatch is
//! intended output.

use crate::error::LabError;
use crate::field::VectorField;
use crate::region::Region;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Reference sub-interval count per boundary edge.
pub const DEFAULT_STEPS_PER_EDGE: usize = 20;

/// Outward unit normals for the bl->br->tr->tl edge cycle:
/// bottom, right, top, left.
const EDGE_NORMALS: [DVec2; 4] = [
    DVec2::new(0.0, -1.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(0.0, 1.0),
    DVec2::new(-1.0, 0.0),
];

/// Three-way sign classification of the divergence at the region center.
///
/// The exact-zero branch is deliberate: a center on the divergence-free
/// line reports `Neutral`, not a signed class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivergenceClass {
    Expansion,
    Contraction,
    Neutral,
}

impl DivergenceClass {
    /// `> 0` expansion, `< 0` contraction, exactly zero neutral.
    pub fn classify(value: f64) -> Self {
        if value > 0.0 {
            DivergenceClass::Expansion
        } else if value < 0.0 {
            DivergenceClass::Contraction
        } else {
            DivergenceClass::Neutral
        }
    }

    /// Label used in status lines.
    pub fn label(self) -> &'static str {
        match self {
            DivergenceClass::Expansion => "expansion",
            DivergenceClass::Contraction => "contraction",
            DivergenceClass::Neutral => "neutral",
        }
    }
}

/// Left-Riemann boundary integrator with a fixed per-edge step count.
#[derive(Debug, Clone, Copy)]
pub struct Integrator {
    steps_per_edge: usize,
}

impl Integrator {
    /// Creates an integrator with the given sub-interval count per edge.
    ///
    /// Returns `LabError::ZeroSteps` for zero, so the per-tick sums stay
    /// total functions.
    pub fn new(steps_per_edge: usize) -> Result<Self, LabError> {
        if steps_per_edge == 0 {
            return Err(LabError::ZeroSteps);
        }
        Ok(Self { steps_per_edge })
    }

    /// Configured sub-interval count per edge.
    pub fn steps_per_edge(&self) -> usize {
        self.steps_per_edge
    }

    /// Discrete circulation ∮F·ds along the region boundary.
    ///
    /// Each edge is split into `steps_per_edge` sub-intervals of parameter
    /// t in [0, 1); the field is evaluated at the left endpoint of each and
    /// dotted with the constant per-step displacement `(end - start) / steps`.
    pub fn circulation(&self, region: &Region, field: &dyn VectorField) -> f64 {
        let dt = 1.0 / self.steps_per_edge as f64;
        let mut circulation = 0.0;
        for (start, end) in region.edges() {
            let ds = (end - start) * dt;
            for i in 0..self.steps_per_edge {
                let pos = start.lerp(end, i as f64 * dt);
                circulation += field.evaluate(pos).dot(ds);
            }
        }
        circulation
    }

    /// Discrete outward flux ∮F·n̂ ds along the region boundary.
    ///
    /// Same left-endpoint sampling as [`Integrator::circulation`], with each
    /// edge's fixed outward normal and scalar arc step `|end - start| / steps`.
    pub fn boundary_flux(&self, region: &Region, field: &dyn VectorField) -> f64 {
        let dt = 1.0 / self.steps_per_edge as f64;
        let mut flux = 0.0;
        for ((start, end), normal) in region.edges().into_iter().zip(EDGE_NORMALS) {
            let ds = (end - start).length() * dt;
            for i in 0..self.steps_per_edge {
                let pos = start.lerp(end, i as f64 * dt);
                flux += field.evaluate(pos).dot(normal) * ds;
            }
        }
        flux
    }
}

/// Green's-theorem prediction: curl at the center times the region area.
///
/// Treats curl as constant over the region; converges to the discrete
/// circulation only as the region shrinks.
pub fn predicted_circulation(region: &Region, field: &dyn VectorField) -> f64 {
    field.curl_at(region.center()) * region.area()
}

/// Divergence-theorem prediction: divergence at the center times the area.
pub fn predicted_flux(region: &Region, field: &dyn VectorField) -> f64 {
    field.divergence_at(region.center()) * region.area()
}
