//! CSS values and geometry for the Tether positioning engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Box geometry** ([CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/))
//!   - Layout rectangles in document coordinates
//!   - `DOMRect`-style client rectangles and integer rounding
//!
//! - **Display** ([CSS Display Level 3](https://www.w3.org/TR/css-display-3/))
//!   - Keyword parsing for the `display` property
//!   - Default display per element
//!
//! - **Lengths** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - `parseInt`-style integer extraction from serialized lengths
//!
//! - **Computed style** ([CSSOM § getComputedStyle](https://drafts.csswg.org/cssom/#dom-window-getcomputedstyle))
//!   - `display` and the four margins, resolved from inline declarations
//!
//! # Not Yet Implemented
//!
//! - Stylesheets and the cascade (only inline declarations are honored)
//! - Percentage and font-relative margins

/// Layout and client rectangles.
pub mod box_model;
/// Computed style resolution.
pub mod computed;
/// The `display` property.
pub mod display;
/// Length parsing.
pub mod length;

pub use box_model::{DomRect, Rect, round_half_up};
pub use computed::ComputedStyle;
pub use display::{DisplayKeyword, default_display_for_element, parse_display};
pub use length::{parse_int, parse_margin_shorthand};
