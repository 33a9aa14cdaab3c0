//! Error types for the fieldlab core.
//!
//! Every variant is a configuration error surfaced at construction time;
//! per-tick computations are total and never produce one of these.

use thiserror::Error;

/// Errors produced by core operations.
#[derive(Debug, Error)]
pub enum LabError {
    /// A logical or screen interval had zero width when building a mapping.
    #[error("degenerate {axis} interval: [{lo}, {hi}] has zero width")]
    DegenerateInterval {
        axis: &'static str,
        lo: f64,
        hi: f64,
    },

    /// Region size bounds did not form a valid positive range.
    #[error("invalid size bounds: [{min}, {max}] (need 0 < min <= max)")]
    InvalidSizeBounds { min: f64, max: f64 },

    /// A grid sampler was configured with a non-positive spacing.
    #[error("grid spacing must be positive, got {0}")]
    InvalidSpacing(f64),

    /// An integrator was configured with zero sub-intervals per edge.
    #[error("steps per edge must be non-zero")]
    ZeroSteps,

    /// A requested field name was not found in the registry.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// An I/O error while writing a snapshot.
    #[error("I/O error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_interval_names_the_axis() {
        let err = LabError::DegenerateInterval {
            axis: "screen x",
            lo: 50.0,
            hi: 50.0,
        };
        let msg = format!("{err}");
        assert!(
            msg.contains("screen x") && msg.contains("50"),
            "expected axis and endpoint in message, got: {msg}"
        );
    }

    #[test]
    fn invalid_size_bounds_includes_both_bounds() {
        let err = LabError::InvalidSizeBounds { min: 5.0, max: 0.5 };
        let msg = format!("{err}");
        assert!(msg.contains("5"), "missing min in: {msg}");
        assert!(msg.contains("0.5"), "missing max in: {msg}");
    }

    #[test]
    fn invalid_spacing_includes_value() {
        let err = LabError::InvalidSpacing(-1.0);
        assert!(format!("{err}").contains("-1"));
    }

    #[test]
    fn zero_steps_displays_readable_message() {
        let err = LabError::ZeroSteps;
        assert!(format!("{err}").contains("steps per edge"));
    }

    #[test]
    fn unknown_field_includes_name() {
        let err = LabError::UnknownField("vortex".into());
        assert!(format!("{err}").contains("vortex"));
    }

    #[test]
    fn io_includes_message() {
        let err = LabError::Io("disk full".into());
        assert!(format!("{err}").contains("disk full"));
    }

    #[test]
    fn lab_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LabError>();
    }

    #[test]
    fn lab_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<LabError>();
    }
}
