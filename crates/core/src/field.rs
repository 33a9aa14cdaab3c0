//! The `VectorField` capability trait.
//!
//! A vector field maps a domain point to a vector, and exposes the two
//! scalar differential operators the visualization reports: divergence and
//! (the 2D pseudo-scalar) curl. Closed-form fields override the derivative
//! methods; sampled fields inherit the central-difference defaults.
//!
//! All implementations must be deterministic: same input point, same output.

use glam::DVec2;

/// Step used by the default central-difference derivative implementations.
const DERIVATIVE_EPS: f64 = 1e-4;

/// A 2D vector field F(x, y) with divergence and curl.
///
/// This trait is **object-safe**: `Box<dyn VectorField>` and
/// `&dyn VectorField` work for runtime field switching.
pub trait VectorField: Send + Sync {
    /// Evaluates F at `p`.
    fn evaluate(&self, p: DVec2) -> DVec2;

    /// Divergence ∂Fx/∂x + ∂Fy/∂y at `p`.
    ///
    /// The default samples `evaluate` with central differences at a fixed
    /// step. Fields with a closed form should override it; that closed form
    /// is then the reference behavior.
    fn divergence_at(&self, p: DVec2) -> f64 {
        let e = DERIVATIVE_EPS;
        let dfx_dx = (self.evaluate(DVec2::new(p.x + e, p.y)).x
            - self.evaluate(DVec2::new(p.x - e, p.y)).x)
            / (2.0 * e);
        let dfy_dy = (self.evaluate(DVec2::new(p.x, p.y + e)).y
            - self.evaluate(DVec2::new(p.x, p.y - e)).y)
            / (2.0 * e);
        dfx_dx + dfy_dy
    }

    /// Scalar curl ∂Fy/∂x − ∂Fx/∂y at `p`.
    ///
    /// Same central-difference default as [`VectorField::divergence_at`].
    fn curl_at(&self, p: DVec2) -> f64 {
        let e = DERIVATIVE_EPS;
        let dfy_dx = (self.evaluate(DVec2::new(p.x + e, p.y)).y
            - self.evaluate(DVec2::new(p.x - e, p.y)).y)
            / (2.0 * e);
        let dfx_dy = (self.evaluate(DVec2::new(p.x, p.y + e)).x
            - self.evaluate(DVec2::new(p.x, p.y - e)).x)
            / (2.0 * e);
        dfy_dx - dfx_dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Linear field F = (2x, 3y) relying entirely on the default derivatives.
    struct Stretch;

    impl VectorField for Stretch {
        fn evaluate(&self, p: DVec2) -> DVec2 {
            DVec2::new(2.0 * p.x, 3.0 * p.y)
        }
    }

    /// Quadratic field F = (0, x^2) with a position-dependent curl.
    struct Bend;

    impl VectorField for Bend {
        fn evaluate(&self, p: DVec2) -> DVec2 {
            DVec2::new(0.0, p.x * p.x)
        }
    }

    #[test]
    fn default_divergence_matches_linear_field() {
        // div(2x, 3y) = 5 everywhere; central differences are exact on
        // linear fields up to rounding.
        let p = DVec2::new(1.3, -0.7);
        assert!((Stretch.divergence_at(p) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn default_curl_vanishes_for_gradient_field() {
        let p = DVec2::new(-2.0, 4.0);
        assert!(Stretch.curl_at(p).abs() < 1e-6);
    }

    #[test]
    fn default_curl_matches_quadratic_field() {
        // curl(0, x^2) = 2x; central differences are exact on quadratics.
        let p = DVec2::new(1.5, 0.0);
        assert!((Bend.curl_at(p) - 3.0).abs() < 1e-6);
        let q = DVec2::new(-2.5, 3.0);
        assert!((Bend.curl_at(q) + 5.0).abs() < 1e-6);
    }

    #[test]
    fn default_divergence_vanishes_for_shear_field() {
        let p = DVec2::new(0.4, -1.1);
        assert!(Bend.divergence_at(p).abs() < 1e-6);
    }

    #[test]
    fn trait_is_object_safe() {
        let field: Box<dyn VectorField> = Box::new(Stretch);
        let v = field.evaluate(DVec2::new(1.0, 1.0));
        assert!((v.x - 2.0).abs() < f64::EPSILON);
        assert!((v.y - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dyn_reference_dispatches_derivatives() {
        let field: &dyn VectorField = &Bend;
        assert!((field.curl_at(DVec2::new(1.0, 0.0)) - 2.0).abs() < 1e-6);
    }
}
