//! Affine mappings between logical coordinates and screen pixels.
//!
//! An [`AxisMapping`] carries one linear map from a logical interval onto a
//! screen interval; a [`PanelMapping`] pairs two of them into a rectangular
//! panel. The y screen interval runs bottom-to-top so that "up" in logical
//! space renders upward on screen. Both directions are exposed
//! (`to_screen` / `to_logical`) and are mutual inverses up to floating-point
//! tolerance.
//!
//! Degenerate (zero-width) intervals are rejected at construction, never at
//! call time.

use crate::error::LabError;
use glam::DVec2;

/// An invertible linear map from one scalar interval onto another.
///
/// Either interval may be decreasing (the y axis uses a decreasing screen
/// interval for inversion); only zero width is invalid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapping {
    logical_min: f64,
    logical_max: f64,
    screen_min: f64,
    screen_max: f64,
}

impl AxisMapping {
    /// Creates a mapping from `[logical_min, logical_max]` onto
    /// `[screen_min, screen_max]`.
    ///
    /// `axis` names the screen interval in error messages (e.g.
    /// `"screen x"`); a degenerate logical interval reports as `"logical"`.
    /// Returns `LabError::DegenerateInterval` if either interval has zero
    /// width.
    pub fn new(
        axis: &'static str,
        logical_min: f64,
        logical_max: f64,
        screen_min: f64,
        screen_max: f64,
    ) -> Result<Self, LabError> {
        if logical_min == logical_max {
            return Err(LabError::DegenerateInterval {
                axis: "logical",
                lo: logical_min,
                hi: logical_max,
            });
        }
        if screen_min == screen_max {
            return Err(LabError::DegenerateInterval {
                axis,
                lo: screen_min,
                hi: screen_max,
            });
        }
        Ok(Self {
            logical_min,
            logical_max,
            screen_min,
            screen_max,
        })
    }

    /// Maps a logical value to screen space.
    pub fn to_screen(&self, v: f64) -> f64 {
        self.screen_min
            + (v - self.logical_min) / (self.logical_max - self.logical_min)
                * (self.screen_max - self.screen_min)
    }

    /// Maps a screen value back to logical space.
    pub fn to_logical(&self, s: f64) -> f64 {
        self.logical_min
            + (s - self.screen_min) / (self.screen_max - self.screen_min)
                * (self.logical_max - self.logical_min)
    }

    /// Whether a screen value lies within the screen interval (inclusive),
    /// regardless of interval direction.
    pub fn screen_contains(&self, s: f64) -> bool {
        let lo = self.screen_min.min(self.screen_max);
        let hi = self.screen_min.max(self.screen_max);
        (lo..=hi).contains(&s)
    }
}

/// A rectangular screen panel: one [`AxisMapping`] per axis.
///
/// Two panels exist in the reference configuration (domain and transformed);
/// they are fully independent instances sharing no state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelMapping {
    x: AxisMapping,
    y: AxisMapping,
}

impl PanelMapping {
    /// Creates a panel from logical x/y ranges and a pixel rectangle.
    ///
    /// The y mapping is built with the screen interval running
    /// `bottom -> top`, so `logical_y.0` lands on the bottom edge.
    pub fn new(
        logical_x: (f64, f64),
        logical_y: (f64, f64),
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
    ) -> Result<Self, LabError> {
        Ok(Self {
            x: AxisMapping::new("screen x", logical_x.0, logical_x.1, left, right)?,
            y: AxisMapping::new("screen y", logical_y.0, logical_y.1, bottom, top)?,
        })
    }

    /// Projects a logical point onto the panel.
    pub fn to_screen(&self, p: DVec2) -> DVec2 {
        DVec2::new(self.x.to_screen(p.x), self.y.to_screen(p.y))
    }

    /// Converts a screen point back to logical coordinates.
    pub fn to_logical(&self, p: DVec2) -> DVec2 {
        DVec2::new(self.x.to_logical(p.x), self.y.to_logical(p.y))
    }

    /// Whether a screen point lies within the panel rectangle (inclusive).
    pub fn contains_screen(&self, p: DVec2) -> bool {
        self.x.screen_contains(p.x) && self.y.screen_contains(p.y)
    }
}
