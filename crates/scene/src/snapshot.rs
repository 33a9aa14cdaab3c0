//! The per-tick data snapshot handed to the presentation layer.
//!
//! Everything a renderer needs is computed once per tick and bundled here:
//! grid samples, region corners in domain, transformed, and screen space,
//! the boundary scalars with their classification, and two-decimal corner
//! labels for panel annotation. The snapshot is plain data: serializable,
//! comparable, and detached from the scene that produced it.

use fieldlab_core::error::LabError;
use fieldlab_core::integrate::{predicted_circulation, predicted_flux};
use fieldlab_core::{DivergenceClass, GridSample, Integrator, PanelMapping, Region, VectorField};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::FieldKind;

/// Complete result of one scene tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    /// Registry name of the field.
    pub field: String,
    /// Region side length after clamping.
    pub size: f64,
    /// Region center, domain space.
    pub center: DVec2,
    /// Region center projected onto the domain panel.
    pub center_screen: DVec2,
    /// One pass of the arrow-grid samples.
    pub grid: Vec<GridSample>,
    /// Region corners in domain space, order bl, br, tr, tl.
    pub domain_corners: [DVec2; 4],
    /// Domain corners projected onto the domain panel.
    pub domain_corners_screen: [DVec2; 4],
    /// Field image of each corner, transformed space.
    pub transformed_corners: [DVec2; 4],
    /// Transformed corners projected onto the transformed panel.
    pub transformed_corners_screen: [DVec2; 4],
    /// Two-decimal labels for the domain corners.
    pub domain_corner_labels: [String; 4],
    /// Two-decimal labels for the transformed corners.
    pub transformed_corner_labels: [String; 4],
    /// Divergence at the region center.
    pub divergence: f64,
    /// Sign classification of `divergence`.
    pub divergence_class: DivergenceClass,
    /// Discrete boundary circulation ∮F·ds.
    pub circulation: f64,
    /// Green's-theorem prediction `curl(center) * area`.
    pub predicted_circulation: f64,
    /// Discrete outward boundary flux ∮F·n̂ ds.
    pub boundary_flux: f64,
    /// Divergence-theorem prediction `div(center) * area`.
    pub predicted_flux: f64,
}

impl TickSnapshot {
    /// Computes a snapshot from current scene state.
    pub(crate) fn assemble(
        field: &FieldKind,
        region: &Region,
        domain_panel: &PanelMapping,
        transformed_panel: &PanelMapping,
        integrator: &Integrator,
        grid: Vec<GridSample>,
    ) -> Self {
        let center = region.center();
        let domain_corners = region.corners();
        let transformed_corners = domain_corners.map(|c| field.evaluate(c));
        let divergence = field.divergence_at(center);
        Self {
            field: field.name().to_string(),
            size: region.size(),
            center,
            center_screen: domain_panel.to_screen(center),
            grid,
            domain_corners_screen: domain_corners.map(|c| domain_panel.to_screen(c)),
            transformed_corners_screen: transformed_corners
                .map(|c| transformed_panel.to_screen(c)),
            domain_corner_labels: domain_corners.map(format_coord),
            transformed_corner_labels: transformed_corners.map(format_coord),
            domain_corners,
            transformed_corners,
            divergence,
            divergence_class: DivergenceClass::classify(divergence),
            circulation: integrator.circulation(region, field),
            predicted_circulation: predicted_circulation(region, field),
            boundary_flux: integrator.boundary_flux(region, field),
            predicted_flux: predicted_flux(region, field),
        }
    }
}

/// Formats a point as a corner annotation: `(x.xx, y.yy)`.
pub fn format_coord(p: DVec2) -> String {
    format!("({:.2}, {:.2})", p.x, p.y)
}

/// Writes a snapshot as pretty-printed JSON.
///
/// Returns `LabError::Io` on serialization or write failure. This is the
/// only file output in the system and never runs inside a tick.
pub fn write_json(snapshot: &TickSnapshot, path: &Path) -> Result<(), LabError> {
    let json =
        serde_json::to_string_pretty(snapshot).map_err(|e| LabError::Io(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| LabError::Io(e.to_string()))
}
