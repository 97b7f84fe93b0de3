//! Computed style for positioned overlay elements.
//!
//! [CSSOM § 9 getComputedStyle](https://drafts.csswg.org/cssom/#dom-window-getcomputedstyle)
//!
//! Only the properties the positioning engine reads are resolved: `display`
//! and the four margins. Margins are serialized as strings, exactly as a
//! host's computed style object would report them.

use serde::Serialize;
use tether_dom::ElementData;

use crate::display::{DisplayKeyword, default_display_for_element, parse_display};
use crate::length::parse_margin_shorthand;

/// Initial value of the margin properties.
const INITIAL_MARGIN: &str = "0px";

/// Computed values of the properties the engine reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedStyle {
    /// Used `display` keyword.
    pub display: DisplayKeyword,
    /// Serialized `margin-top`.
    pub margin_top: String,
    /// Serialized `margin-right`.
    pub margin_right: String,
    /// Serialized `margin-bottom`.
    pub margin_bottom: String,
    /// Serialized `margin-left`.
    pub margin_left: String,
}

impl ComputedStyle {
    /// Resolve the computed style of an element from its inline declarations.
    ///
    /// Longhand margins win over the `margin` shorthand regardless of
    /// declaration order; an invalid shorthand is ignored.
    #[must_use]
    pub fn compute(element: &ElementData) -> Self {
        let style = &element.style;
        let display = style
            .get_property("display")
            .and_then(parse_display)
            .unwrap_or_else(|| default_display_for_element(&element.tag_name));

        let shorthand = style
            .get_property("margin")
            .and_then(parse_margin_shorthand)
            .unwrap_or_else(|| INITIAL_MARGIN_SIDES.map(str::to_string));
        let [top, right, bottom, left] = shorthand;
        let longhand = |name: &str, fallback: String| {
            style
                .get_property(name)
                .map_or(fallback, str::to_string)
        };

        Self {
            display,
            margin_top: longhand("margin-top", top),
            margin_right: longhand("margin-right", right),
            margin_bottom: longhand("margin-bottom", bottom),
            margin_left: longhand("margin-left", left),
        }
    }
}

const INITIAL_MARGIN_SIDES: [&str; 4] = [INITIAL_MARGIN; 4];
