#![deny(unsafe_code)]
//! The fixed reference field F(x, y) = (x + y, x^2 - y^2).
//!
//! A linear shear in the first component and a saddle in the second. Both
//! differential operators have closed forms,
//!
//! - divergence = ∂(x+y)/∂x + ∂(x²−y²)/∂y = 1 − 2y
//! - curl       = ∂(x²−y²)/∂x − ∂(x+y)/∂y = 2x − 1
//!
//! which override the trait's central-difference defaults and serve as the
//! test oracles.

use fieldlab_core::VectorField;
use glam::DVec2;

/// The reference saddle-shear field.
///
/// Stateless and total: defined everywhere, no singularities, deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaddleShear;

impl SaddleShear {
    /// Registry name.
    pub const NAME: &'static str = "saddle-shear";

    /// Default region center for this field.
    pub const DEFAULT_CENTER: DVec2 = DVec2::ZERO;

    /// Logical range of the transformed panel: the image of the
    /// [-5, 5]² domain sits inside [-10, 10] x [-25, 25].
    pub const TRANSFORMED_X: (f64, f64) = (-10.0, 10.0);
    pub const TRANSFORMED_Y: (f64, f64) = (-25.0, 25.0);
}

impl VectorField for SaddleShear {
    fn evaluate(&self, p: DVec2) -> DVec2 {
        DVec2::new(p.x + p.y, p.x * p.x - p.y * p.y)
    }

    fn divergence_at(&self, p: DVec2) -> f64 {
        1.0 - 2.0 * p.y
    }

    fn curl_at(&self, p: DVec2) -> f64 {
        2.0 * p.x - 1.0
    }
}
