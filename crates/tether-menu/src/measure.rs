//! The measurement primitive.

use tether_common::warning::warn_once;
use tether_css::parse_int;

use crate::geometry::ElementRect;
use crate::host::ElementHost;

/// Measure one element as a rounded [`ElementRect`].
///
/// Rounds every bounding-rectangle field to the nearest pixel. With `attach`
/// set the overlay sits in normal flow, so its true offset from the anchor
/// is its margin: `left`/`top` are replaced by the computed `margin-left` and
/// `margin-top`.
pub fn measure<H: ElementHost + ?Sized>(
    host: &H,
    element: H::Element,
    attach: bool,
) -> ElementRect {
    let mut rect = ElementRect::from(host.bounding_client_rect(element));

    if attach {
        let style = host.computed_style(element);
        rect.left = margin_px("margin-left", &style.margin_left);
        rect.top = margin_px("margin-top", &style.margin_top);
    }

    rect
}

/// Integer pixel value of a serialized margin, 0 when it has no leading integer.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn margin_px(property: &str, value: &str) -> f64 {
    parse_int(value).map_or_else(
        || {
            warn_once(
                "Measure",
                &format!("unparsable {property} '{value}' in attach mode, using 0"),
            );
            0.0
        },
        |px| px as f64,
    )
}
