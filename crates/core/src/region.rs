//! The draggable square region in domain space.
//!
//! A [`Region`] owns a center point and a side length; corners and edges are
//! derived on demand, never stored. The corner order is bottom-left,
//! bottom-right, top-right, top-left (counter-clockwise in y-up logical
//! space), which fixes the boundary orientation the integrator's
//! Green's-theorem sign convention depends on.

use crate::error::LabError;
use glam::DVec2;

/// An axis-aligned square, parameterized by center and side length.
///
/// The side length is clamped to the configured `[min_size, max_size]`
/// bounds on every mutation, matching the slider control that feeds it.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    center: DVec2,
    size: f64,
    min_size: f64,
    max_size: f64,
}

impl Region {
    /// Creates a region with the given center, side length, and size bounds.
    ///
    /// The initial `size` is clamped into bounds. Returns
    /// `LabError::InvalidSizeBounds` unless `0 < min_size <= max_size`.
    pub fn new(center: DVec2, size: f64, min_size: f64, max_size: f64) -> Result<Self, LabError> {
        if !(min_size > 0.0 && min_size <= max_size) {
            return Err(LabError::InvalidSizeBounds {
                min: min_size,
                max: max_size,
            });
        }
        Ok(Self {
            center,
            size: size.clamp(min_size, max_size),
            min_size,
            max_size,
        })
    }

    /// Current center, in domain coordinates.
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Moves the center. No bounds are applied; the drag controller gates
    /// which pointer positions reach this.
    pub fn set_center(&mut self, center: DVec2) {
        self.center = center;
    }

    /// Current side length.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Sets the side length, clamped into the configured bounds.
    pub fn set_size(&mut self, size: f64) {
        self.size = size.clamp(self.min_size, self.max_size);
    }

    /// Area of the square (`size^2`).
    pub fn area(&self) -> f64 {
        self.size * self.size
    }

    /// The four corners in counter-clockwise winding order:
    /// bottom-left, bottom-right, top-right, top-left.
    pub fn corners(&self) -> [DVec2; 4] {
        let half = self.size / 2.0;
        let c = self.center;
        [
            DVec2::new(c.x - half, c.y - half),
            DVec2::new(c.x + half, c.y - half),
            DVec2::new(c.x + half, c.y + half),
            DVec2::new(c.x - half, c.y + half),
        ]
    }

    /// The four boundary edges as `(start, end)` pairs of consecutive
    /// corners, closing back to the first.
    pub fn edges(&self) -> [(DVec2, DVec2); 4] {
        let [bl, br, tr, tl] = self.corners();
        [(bl, br), (br, tr), (tr, tl), (tl, bl)]
    }
}
