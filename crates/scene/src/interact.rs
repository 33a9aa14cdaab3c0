//! Pointer drag handling for the region center.
//!
//! The gesture is deliberately narrow: the pointer must be inside the
//! domain panel, and its domain-space image must fall within a small
//! capture radius of the current center. A grab handle, not a
//! drag-anywhere-in-region gesture.

use fieldlab_core::{PanelMapping, Region};
use glam::DVec2;

/// Applies a drag at `screen_point` to the region center.
///
/// Screen points outside `panel` are ignored without error. Inside the
/// panel, the point is converted to domain space and the center moves to it
/// only when it lies strictly within `capture_radius` of the current
/// center. Returns whether the center moved.
pub fn apply_drag(
    region: &mut Region,
    panel: &PanelMapping,
    screen_point: DVec2,
    capture_radius: f64,
) -> bool {
    if !panel.contains_screen(screen_point) {
        return false;
    }
    let domain_point = panel.to_logical(screen_point);
    if domain_point.distance(region.center()) < capture_radius {
        region.set_center(domain_point);
        true
    } else {
        false
    }
}
