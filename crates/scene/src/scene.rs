//! The per-tick scene: region state, panels, and snapshot assembly.
//!
//! `Scene` is the single context object for one visualization: it owns the
//! only mutable state in the system (the region) and recomputes everything
//! else from scratch on each tick. No caching, no suspension points, no
//! I/O.

use crate::config::{SceneConfig, DOMAIN_PANEL, DOMAIN_RANGE, TRANSFORMED_PANEL};
use crate::interact;
use crate::snapshot::TickSnapshot;
use crate::FieldKind;
use fieldlab_core::error::LabError;
use fieldlab_core::{GridSample, GridSampler, Integrator, PanelMapping, Region};
use glam::DVec2;
use serde_json::Value;

/// Owns the region, field, panels, grid, and integrator for one
/// visualization.
pub struct Scene {
    field: FieldKind,
    region: Region,
    domain_panel: PanelMapping,
    transformed_panel: PanelMapping,
    grid: GridSampler,
    integrator: Integrator,
    capture_radius: f64,
}

impl Scene {
    /// Creates a scene for `field` from an explicit configuration.
    ///
    /// All configuration validation happens here: degenerate panels, bad
    /// size bounds, zero steps, and non-positive grid spacing are rejected
    /// before any tick runs.
    pub fn new(field: FieldKind, config: &SceneConfig) -> Result<Self, LabError> {
        let (left, right, top, bottom) = DOMAIN_PANEL;
        let domain_panel =
            PanelMapping::new(DOMAIN_RANGE, DOMAIN_RANGE, left, right, top, bottom)?;
        let (left, right, top, bottom) = TRANSFORMED_PANEL;
        let transformed_panel = PanelMapping::new(
            field.transformed_x(),
            field.transformed_y(),
            left,
            right,
            top,
            bottom,
        )?;
        Ok(Self {
            region: Region::new(config.center, config.size, config.min_size, config.max_size)?,
            grid: GridSampler::new(DOMAIN_RANGE, DOMAIN_RANGE, config.grid_spacing)?,
            integrator: Integrator::new(config.steps_per_edge)?,
            capture_radius: config.capture_radius,
            field,
            domain_panel,
            transformed_panel,
        })
    }

    /// Creates a scene by field name with JSON configuration overrides.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, LabError> {
        let field = FieldKind::from_name(name)?;
        let config = SceneConfig::from_json(&field, params);
        Self::new(field, &config)
    }

    /// The field being visualized.
    pub fn field(&self) -> &FieldKind {
        &self.field
    }

    /// The current region.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// The domain panel mapping.
    pub fn domain_panel(&self) -> &PanelMapping {
        &self.domain_panel
    }

    /// The transformed panel mapping.
    pub fn transformed_panel(&self) -> &PanelMapping {
        &self.transformed_panel
    }

    /// Lazily samples the field over the arrow grid.
    ///
    /// A fresh, restartable iterator per call; the snapshot materializes
    /// one pass of it.
    pub fn grid_samples(&self) -> impl Iterator<Item = GridSample> + '_ {
        self.grid.samples(&self.field)
    }

    /// Advances one tick: applies the externally-owned size value and the
    /// optional pointer position, then recomputes the full snapshot.
    ///
    /// The requested size is clamped by the region bounds; the pointer is
    /// subject to the panel and capture-radius gates.
    pub fn tick(&mut self, requested_size: f64, pointer: Option<DVec2>) -> TickSnapshot {
        self.region.set_size(requested_size);
        if let Some(screen_point) = pointer {
            interact::apply_drag(
                &mut self.region,
                &self.domain_panel,
                screen_point,
                self.capture_radius,
            );
        }
        self.snapshot()
    }

    /// Assembles the current state into a snapshot without mutating it.
    pub fn snapshot(&self) -> TickSnapshot {
        TickSnapshot::assemble(
            &self.field,
            &self.region,
            &self.domain_panel,
            &self.transformed_panel,
            &self.integrator,
            self.grid_samples().collect(),
        )
    }
}
