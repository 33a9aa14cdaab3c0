#![deny(unsafe_code)]
//! Curl-noise vector field: the curl of a Perlin scalar potential.
//!
//! Taking `F = (∂n/∂y, -∂n/∂x)` of a smooth scalar noise `n` yields an
//! approximately divergence-free flow with no closed-form derivatives, so
//! this field leans on the trait's central-difference defaults for
//! `divergence_at` and `curl_at`: the non-analytic end of the strategy
//! seam the closed-form fields occupy.

use fieldlab_core::VectorField;
use glam::DVec2;
use noise::{NoiseFn, Perlin};

/// Potential-gradient step below which the field degrades to zero rather
/// than divide by a vanishing epsilon.
const SINGULARITY_EPS: f64 = 1e-12;

/// Curl of a Perlin scalar potential, sampled with central differences.
pub struct CurlNoise {
    noise: Perlin,
    scale: f64,
    strength: f64,
    eps: f64,
}

impl CurlNoise {
    /// Registry name.
    pub const NAME: &'static str = "curl-noise";

    /// Default region center for this field.
    pub const DEFAULT_CENTER: DVec2 = DVec2::ZERO;

    /// Logical range of the transformed panel. The potential gradient is
    /// bounded well inside this at the default scale and strength.
    pub const TRANSFORMED_X: (f64, f64) = (-3.0, 3.0);
    pub const TRANSFORMED_Y: (f64, f64) = (-3.0, 3.0);

    /// Creates a curl-noise field with default epsilon of 0.001.
    pub fn new(scale: f64, strength: f64, seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            scale,
            strength,
            eps: 0.001,
        }
    }
}

impl Default for CurlNoise {
    fn default() -> Self {
        Self::new(0.4, 0.6, 7)
    }
}

impl VectorField for CurlNoise {
    fn evaluate(&self, p: DVec2) -> DVec2 {
        let sx = p.x * self.scale;
        let sy = p.y * self.scale;
        let eps = self.eps * self.scale;
        if eps.abs() < SINGULARITY_EPS {
            return DVec2::ZERO;
        }
        // Curl of a 2D scalar potential n:
        //   Fx = dn/dy, Fy = -dn/dx
        let dn_dy =
            (self.noise.get([sx, sy + eps]) - self.noise.get([sx, sy - eps])) / (2.0 * eps);
        let dn_dx =
            (self.noise.get([sx + eps, sy]) - self.noise.get([sx - eps, sy])) / (2.0 * eps);
        DVec2::new(dn_dy * self.strength, -dn_dx * self.strength)
    }
}
