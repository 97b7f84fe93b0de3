//! Measured geometry shared by the calculator and the resolver.

use serde::Serialize;
use tether_css::DomRect;

use crate::host::ViewportQuery;

/// A rounded snapshot of one element, taken by a single measurement.
///
/// Edge and size fields are integral pixels. `offset_top`/`offset_left` are
/// relative to the offset parent and only recorded for the activator;
/// `scroll_height` is carried for hosts that fill it and otherwise stays 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRect {
    /// Top edge, viewport-relative.
    pub top: f64,
    /// Left edge, viewport-relative.
    pub left: f64,
    /// Bottom edge, viewport-relative.
    pub bottom: f64,
    /// Right edge, viewport-relative.
    pub right: f64,
    /// Border-box width.
    pub width: f64,
    /// Border-box height.
    pub height: f64,
    /// Offset from the offset parent's top.
    pub offset_top: f64,
    /// Offset from the offset parent's left.
    pub offset_left: f64,
    /// Scrollable content height.
    pub scroll_height: f64,
}

impl From<DomRect> for ElementRect {
    fn from(rect: DomRect) -> Self {
        let rect = rect.rounded();
        Self {
            top: rect.top,
            left: rect.left,
            bottom: rect.bottom,
            right: rect.right,
            width: rect.width,
            height: rect.height,
            ..Self::default()
        }
    }
}

/// The activator and content measurements of one overlay.
///
/// Starts zeroed so placement is well-defined (all zero) before the first
/// real measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Dimensions {
    /// Trigger element.
    pub activator: ElementRect,
    /// Overlay element.
    pub content: ElementRect,
}

/// Ambient page state read at the start of every measurement pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetrics {
    /// Vertical scroll position of the document.
    pub page_y_offset: f64,
    /// Visible width of the document root.
    pub page_width: f64,
}

impl PageMetrics {
    /// Snapshot the current scroll offset and document width.
    #[must_use]
    pub fn read<V: ViewportQuery + ?Sized>(viewport: &V) -> Self {
        Self {
            page_y_offset: viewport.scroll_y(),
            page_width: viewport.client_width(),
        }
    }
}
