//! Scene configuration: panel geometry constants and tunable parameters.
//!
//! The pixel rectangles and domain range reproduce the reference layout:
//! two 300-pixel panels side by side over a [-5, 5]² domain.

use crate::FieldKind;
use fieldlab_core::integrate::DEFAULT_STEPS_PER_EDGE;
use fieldlab_core::params::{param_f64, param_point, param_usize};
use glam::DVec2;
use serde_json::Value;

/// Logical range of the domain, both axes.
pub const DOMAIN_RANGE: (f64, f64) = (-5.0, 5.0);

/// Domain panel pixel rectangle (left, right, top, bottom).
pub const DOMAIN_PANEL: (f64, f64, f64, f64) = (50.0, 350.0, 50.0, 350.0);

/// Transformed panel pixel rectangle (left, right, top, bottom).
pub const TRANSFORMED_PANEL: (f64, f64, f64, f64) = (400.0, 700.0, 50.0, 350.0);

/// Default region side length.
pub const DEFAULT_SIZE: f64 = 2.0;

/// Smallest allowed region side length (the slider's lower bound).
pub const SIZE_MIN: f64 = 0.5;

/// Largest allowed region side length (the slider's upper bound).
pub const SIZE_MAX: f64 = 5.0;

/// Grab-handle tolerance around the region center, in domain units.
pub const DEFAULT_CAPTURE_RADIUS: f64 = 1.0;

/// Lattice spacing of the arrow grid, in domain units.
pub const DEFAULT_GRID_SPACING: f64 = 1.0;

/// Tunable scene parameters.
///
/// Defaults depend on the field (each field carries its own region center);
/// everything else starts from the reference configuration. Use
/// [`SceneConfig::from_json`] to override individual values from a JSON
/// object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Initial region center, in domain coordinates.
    pub center: DVec2,
    /// Initial region side length.
    pub size: f64,
    /// Lower size bound.
    pub min_size: f64,
    /// Upper size bound.
    pub max_size: f64,
    /// Sub-intervals per boundary edge for the discrete integrals.
    pub steps_per_edge: usize,
    /// Grab-handle tolerance for drags, in domain units.
    pub capture_radius: f64,
    /// Arrow-grid lattice spacing, in domain units.
    pub grid_spacing: f64,
}

impl SceneConfig {
    /// Reference configuration for the given field.
    pub fn for_field(field: &FieldKind) -> Self {
        Self {
            center: field.default_center(),
            size: DEFAULT_SIZE,
            min_size: SIZE_MIN,
            max_size: SIZE_MAX,
            steps_per_edge: DEFAULT_STEPS_PER_EDGE,
            capture_radius: DEFAULT_CAPTURE_RADIUS,
            grid_spacing: DEFAULT_GRID_SPACING,
        }
    }

    /// Extracts a configuration from a JSON object, falling back to the
    /// field's reference configuration for missing keys.
    pub fn from_json(field: &FieldKind, params: &Value) -> Self {
        let d = Self::for_field(field);
        Self {
            center: param_point(params, "center", d.center),
            size: param_f64(params, "size", d.size),
            min_size: param_f64(params, "min_size", d.min_size),
            max_size: param_f64(params, "max_size", d.max_size),
            steps_per_edge: param_usize(params, "steps_per_edge", d.steps_per_edge),
            capture_radius: param_f64(params, "capture_radius", d.capture_radius),
            grid_spacing: param_f64(params, "grid_spacing", d.grid_spacing),
        }
    }
}
