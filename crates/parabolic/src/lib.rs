#![deny(unsafe_code)]
//! The parabolic sheet T(u, v) = (u, v^2) as a vector field.
//!
//! Taken from the uv-plane transformation study: the first axis passes
//! through unchanged and the second folds onto the parabola v². Viewed as a
//! vector field it is curl-free with divergence 1 + 2v, so the transformed
//! panel shows the region folding across the v = 0 axis while circulation
//! stays pinned at zero.

use fieldlab_core::VectorField;
use glam::DVec2;

/// The curl-free parabolic sheet field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParabolicSheet;

impl ParabolicSheet {
    /// Registry name.
    pub const NAME: &'static str = "parabolic-sheet";

    /// Default region center for this field, off-origin so the fold is
    /// visible immediately.
    pub const DEFAULT_CENTER: DVec2 = DVec2::new(-2.0, -1.0);

    /// Logical range of the transformed panel: u passes through, v² spans
    /// [0, 25] over the [-5, 5] domain.
    pub const TRANSFORMED_X: (f64, f64) = (-5.0, 5.0);
    pub const TRANSFORMED_Y: (f64, f64) = (0.0, 25.0);
}

impl VectorField for ParabolicSheet {
    fn evaluate(&self, p: DVec2) -> DVec2 {
        DVec2::new(p.x, p.y * p.y)
    }

    fn divergence_at(&self, p: DVec2) -> f64 {
        1.0 + 2.0 * p.y
    }

    fn curl_at(&self, _p: DVec2) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_squares_the_second_axis() {
        assert_eq!(
            ParabolicSheet.evaluate(DVec2::new(3.0, -4.0)),
            DVec2::new(3.0, 16.0)
        );
        assert_eq!(
            ParabolicSheet.evaluate(DVec2::new(-1.5, 2.0)),
            DVec2::new(-1.5, 4.0)
        );
    }

    #[test]
    fn fold_maps_opposite_v_to_the_same_image() {
        let up = ParabolicSheet.evaluate(DVec2::new(1.0, 2.5));
        let down = ParabolicSheet.evaluate(DVec2::new(1.0, -2.5));
        assert_eq!(up, down);
    }

    #[test]
    fn divergence_is_one_plus_two_v() {
        assert_eq!(ParabolicSheet.divergence_at(DVec2::new(0.0, 0.0)), 1.0);
        assert_eq!(ParabolicSheet.divergence_at(DVec2::new(4.0, -2.0)), -3.0);
        // Exactly zero on the v = -0.5 line.
        assert_eq!(ParabolicSheet.divergence_at(DVec2::new(1.0, -0.5)), 0.0);
    }

    #[test]
    fn curl_vanishes_everywhere() {
        assert_eq!(ParabolicSheet.curl_at(DVec2::new(-3.0, 4.0)), 0.0);
        assert_eq!(ParabolicSheet.curl_at(DVec2::ZERO), 0.0);
    }

    #[test]
    fn transformed_range_contains_the_domain_image() {
        for u in -5..=5 {
            for v in -5..=5 {
                let p = ParabolicSheet.evaluate(DVec2::new(u as f64, v as f64));
                assert!(
                    p.x >= ParabolicSheet::TRANSFORMED_X.0
                        && p.x <= ParabolicSheet::TRANSFORMED_X.1
                );
                assert!(
                    p.y >= ParabolicSheet::TRANSFORMED_Y.0
                        && p.y <= ParabolicSheet::TRANSFORMED_Y.1
                );
            }
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        struct NumericOnly;

        impl VectorField for NumericOnly {
            fn evaluate(&self, p: DVec2) -> DVec2 {
                ParabolicSheet.evaluate(p)
            }
        }

        proptest! {
            #[test]
            fn closed_forms_match_numeric_defaults(
                u in -5.0_f64..5.0,
                v in -5.0_f64..5.0,
            ) {
                let p = DVec2::new(u, v);
                prop_assert!(
                    (ParabolicSheet.divergence_at(p) - NumericOnly.divergence_at(p)).abs() < 1e-6
                );
                prop_assert!(
                    (ParabolicSheet.curl_at(p) - NumericOnly.curl_at(p)).abs() < 1e-6
                );
            }
        }
    }
}
