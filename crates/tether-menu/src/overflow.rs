//! Viewport overflow correction.

use serde::Serialize;

use crate::config::PlacementConfig;
use crate::geometry::{Dimensions, PageMetrics};
use crate::host::ElementHost;

/// Shift `left` back so an overlay of `menu_width` fits in the page width.
///
/// Applies unless the overlay opens leftward without `right`. The shift is
/// floored at 0: fixing a right-edge overflow never pushes the overlay off
/// the left edge.
#[must_use]
pub fn calc_x_overflow(
    left: f64,
    menu_width: f64,
    metrics: &PageMetrics,
    config: &PlacementConfig,
) -> f64 {
    let x_overflow = left + menu_width - metrics.page_width;

    if (!config.left || config.right) && x_overflow > 0.0 {
        (left - x_overflow).max(0.0)
    } else {
        left
    }
}

/// Keep the overlay's vertical extent inside the visible window.
///
/// At most one correction applies, checked in this order:
/// 1. overflowing the bottom with `offset_overflow` and room above the
///    activator: flip to sit entirely above the activator;
/// 2. overflowing the bottom without `allow_overflow`: clamp to the bottom;
/// 3. above the visible top without `allow_overflow`: clamp to the top.
#[must_use]
pub fn calc_y_overflow(
    top: f64,
    viewport_height: f64,
    dimensions: &Dimensions,
    metrics: &PageMetrics,
    config: &PlacementConfig,
) -> f64 {
    let page_y_offset = metrics.page_y_offset;
    let to_top = page_y_offset + viewport_height;
    let activator = &dimensions.activator;
    let content_height = dimensions.content.height;
    let total_height = top + content_height;
    let is_overflowing = to_top < total_height;

    if is_overflowing && config.offset_overflow && activator.top > content_height {
        log::trace!("y overflow: flipping above activator");
        page_y_offset + (activator.top - content_height)
    } else if is_overflowing && !config.allow_overflow {
        log::trace!("y overflow: clamping to window bottom");
        to_top - content_height
    } else if top < page_y_offset && !config.allow_overflow {
        log::trace!("y overflow: clamping to window top");
        page_y_offset
    } else {
        top
    }
}

/// Which viewport edges an element's bounding box crosses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewportClip {
    /// Extends above the viewport.
    pub top: bool,
    /// Extends left of the viewport.
    pub left: bool,
    /// Extends below the viewport.
    pub bottom: bool,
    /// Extends right of the viewport.
    pub right: bool,
}

impl ViewportClip {
    /// Whether any edge is clipped.
    #[must_use]
    pub const fn any(self) -> bool {
        self.top || self.left || self.bottom || self.right
    }
}

/// Diagnostic query: report each viewport edge an element is clipped by.
#[must_use]
pub fn is_out_of_viewport<H: ElementHost + ?Sized>(host: &H, element: H::Element) -> ViewportClip {
    let bounding = host.bounding_client_rect(element);
    ViewportClip {
        top: bounding.top < 0.0,
        left: bounding.left < 0.0,
        bottom: bounding.bottom > host.viewport_height(),
        right: bounding.right > host.viewport_width(),
    }
}
