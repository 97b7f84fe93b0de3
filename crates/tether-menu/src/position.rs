//! Preferred overlay coordinates before overflow correction.

use crate::config::PlacementConfig;
use crate::geometry::{Dimensions, PageMetrics};

/// Preferred document-relative top edge of the overlay.
///
/// - `top` aligns the overlay's bottom edge with the activator's bottom
///   edge (opens upward).
/// - `offset_y` moves the overlay fully below the activator, or fully above
///   it when combined with `top`.
/// - The activator's viewport-relative top plus the scroll offset turns the
///   result into document coordinates.
#[must_use]
pub fn computed_top(
    dimensions: &Dimensions,
    metrics: &PageMetrics,
    config: &PlacementConfig,
) -> f64 {
    let activator = &dimensions.activator;
    let content = &dimensions.content;
    let mut top = 0.0;

    if config.top {
        top += activator.height - content.height;
    }
    if config.offset_y {
        top += if config.top {
            -activator.height
        } else {
            activator.height
        };
    }

    top + activator.top + metrics.page_y_offset
}

/// Preferred left edge of the overlay.
///
/// - `left` right-aligns the overlay with the activator when the overlay is
///   wider.
/// - `offset_x` moves the overlay beside the activator: to its right, or to
///   its left by `min(activator.width, max_width)` when combined with `left`.
#[must_use]
pub fn computed_left(dimensions: &Dimensions, config: &PlacementConfig) -> f64 {
    let activator = &dimensions.activator;
    let content = &dimensions.content;

    let activator_left = if activator.left.is_finite() {
        activator.left
    } else {
        0.0
    };
    let min_width = activator.width.max(content.width);

    let mut left = if config.left {
        activator_left - (min_width - activator.width)
    } else {
        activator_left
    };

    if config.offset_x {
        let max_width = config
            .max_width
            .as_px()
            .map_or(activator.width, |px| activator.width.min(px));
        left += if config.left {
            -max_width
        } else {
            activator.width
        };
    }

    left
}
