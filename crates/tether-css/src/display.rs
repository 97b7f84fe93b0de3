//! CSS Display property keywords
//!
//! [§ 2 Box Layout Modes: the display property](https://www.w3.org/TR/css-display-3/#the-display-properties)

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};
use tether_common::warning::warn_once;

/// The `display` keywords an overlay toggles between.
///
/// Only the single-keyword forms are recognized; multi-keyword syntax
/// (`display: inline flow-root`) is reported as unsupported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayKeyword {
    /// [§ 2.6 display: none](https://www.w3.org/TR/css-display-3/#valdef-display-none)
    /// "The element and its descendants generate no boxes or text sequences."
    None,
    /// "The element generates a block-level box when placed in flow layout."
    Block,
    /// "The element generates an inline-level box when placed in flow layout."
    #[default]
    Inline,
    /// "This value causes an element to generate an inline-level block container."
    InlineBlock,
    /// "The element generates a principal flex container box."
    Flex,
    /// "The element generates a principal grid container box."
    Grid,
    /// "The element itself does not generate any boxes, but its children do."
    Contents,
}

impl DisplayKeyword {
    /// Whether this value suppresses box generation entirely.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

/// [§ 2 The display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// Parse a declared `display` value. Unrecognized values return `None` after
/// a one-shot warning, so the caller falls back to the element default.
#[must_use]
pub fn parse_display(value: &str) -> Option<DisplayKeyword> {
    let value = value.trim();
    value.parse::<DisplayKeyword>().map_or_else(
        |_| {
            warn_once("CSS", &format!("unsupported display value '{value}'"));
            None
        },
        Some,
    )
}

/// Returns the default display value for an HTML element.
///
/// [§ 15.3.1 Hidden elements](https://html.spec.whatwg.org/multipage/rendering.html#hidden-elements)
/// [§ 15.3.3 Flow content](https://html.spec.whatwg.org/multipage/rendering.html#flow-content-3)
#[must_use]
pub fn default_display_for_element(tag_name: &str) -> DisplayKeyword {
    // "The following elements must have their display set to none"
    const HIDDEN: &[&str] = &[
        "area", "base", "datalist", "head", "link", "meta", "noscript", "script", "style",
        "template", "title",
    ];
    const BLOCK: &[&str] = &[
        "address", "article", "aside", "blockquote", "body", "dd", "details", "dialog", "div",
        "dl", "dt", "fieldset", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
        "header", "hr", "html", "li", "main", "menu", "nav", "ol", "p", "pre", "section", "ul",
    ];

    let tag = tag_name.to_ascii_lowercase();
    if HIDDEN.contains(&tag.as_str()) {
        DisplayKeyword::None
    } else if BLOCK.contains(&tag.as_str()) {
        DisplayKeyword::Block
    } else if matches!(tag.as_str(), "input" | "button" | "textarea" | "select") {
        // Form controls are inline-block by default.
        DisplayKeyword::InlineBlock
    } else {
        DisplayKeyword::Inline
    }
}
