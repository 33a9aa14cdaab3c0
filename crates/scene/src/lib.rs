#![deny(unsafe_code)]
//! Field registry and per-tick scene orchestration.
//!
//! This crate sits between `fieldlab-core` (which defines the `VectorField`
//! trait and the numerical machinery) and the individual field crates. The
//! [`FieldKind`] registry maps names to field implementations and carries
//! each field's panel defaults; [`Scene`] owns the mutable per-tick state
//! and assembles [`snapshot::TickSnapshot`]s for the presentation layer.

pub mod config;
pub mod interact;
pub mod scene;
pub mod snapshot;

use fieldlab_core::error::LabError;
use fieldlab_core::VectorField;
use fieldlab_parabolic::ParabolicSheet;
use fieldlab_saddle::SaddleShear;
use fieldlab_swirl::CurlNoise;
use glam::DVec2;

pub use scene::Scene;
pub use snapshot::TickSnapshot;

/// All available field names.
const FIELD_NAMES: &[&str] = &[SaddleShear::NAME, ParabolicSheet::NAME, CurlNoise::NAME];

/// Enumeration of all available vector fields.
///
/// Wraps each field implementation and delegates `VectorField` methods.
/// Use [`FieldKind::from_name`] for string-based construction (CLI).
pub enum FieldKind {
    /// The fixed reference field F(x, y) = (x + y, x² − y²).
    Saddle(SaddleShear),
    /// The curl-free parabolic sheet T(u, v) = (u, v²).
    Parabolic(ParabolicSheet),
    /// Curl of a Perlin scalar potential, numeric derivatives.
    CurlNoise(CurlNoise),
}

impl FieldKind {
    /// Constructs a field by name.
    ///
    /// Returns `LabError::UnknownField` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, LabError> {
        match name {
            SaddleShear::NAME => Ok(FieldKind::Saddle(SaddleShear)),
            ParabolicSheet::NAME => Ok(FieldKind::Parabolic(ParabolicSheet)),
            CurlNoise::NAME => Ok(FieldKind::CurlNoise(CurlNoise::default())),
            _ => Err(LabError::UnknownField(name.to_string())),
        }
    }

    /// Returns a slice of all recognized field names.
    pub fn list_fields() -> &'static [&'static str] {
        FIELD_NAMES
    }

    /// Registry name of this field.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Saddle(_) => SaddleShear::NAME,
            FieldKind::Parabolic(_) => ParabolicSheet::NAME,
            FieldKind::CurlNoise(_) => CurlNoise::NAME,
        }
    }

    /// Default region center for this field.
    pub fn default_center(&self) -> DVec2 {
        match self {
            FieldKind::Saddle(_) => SaddleShear::DEFAULT_CENTER,
            FieldKind::Parabolic(_) => ParabolicSheet::DEFAULT_CENTER,
            FieldKind::CurlNoise(_) => CurlNoise::DEFAULT_CENTER,
        }
    }

    /// Logical x range of this field's transformed panel.
    pub fn transformed_x(&self) -> (f64, f64) {
        match self {
            FieldKind::Saddle(_) => SaddleShear::TRANSFORMED_X,
            FieldKind::Parabolic(_) => ParabolicSheet::TRANSFORMED_X,
            FieldKind::CurlNoise(_) => CurlNoise::TRANSFORMED_X,
        }
    }

    /// Logical y range of this field's transformed panel.
    pub fn transformed_y(&self) -> (f64, f64) {
        match self {
            FieldKind::Saddle(_) => SaddleShear::TRANSFORMED_Y,
            FieldKind::Parabolic(_) => ParabolicSheet::TRANSFORMED_Y,
            FieldKind::CurlNoise(_) => CurlNoise::TRANSFORMED_Y,
        }
    }
}

impl VectorField for FieldKind {
    fn evaluate(&self, p: DVec2) -> DVec2 {
        match self {
            FieldKind::Saddle(f) => f.evaluate(p),
            FieldKind::Parabolic(f) => f.evaluate(p),
            FieldKind::CurlNoise(f) => f.evaluate(p),
        }
    }

    fn divergence_at(&self, p: DVec2) -> f64 {
        match self {
            FieldKind::Saddle(f) => f.divergence_at(p),
            FieldKind::Parabolic(f) => f.divergence_at(p),
            FieldKind::CurlNoise(f) => f.divergence_at(p),
        }
    }

    fn curl_at(&self, p: DVec2) -> f64 {
        match self {
            FieldKind::Saddle(f) => f.curl_at(p),
            FieldKind::Parabolic(f) => f.curl_at(p),
            FieldKind::CurlNoise(f) => f.curl_at(p),
        }
    }
}
