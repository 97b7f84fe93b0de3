//! CSS Box Model types.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//! [Geometry Interfaces Module Level 1](https://www.w3.org/TR/geometry-1/)

use serde::{Deserialize, Serialize};

/// A border box positioned in document coordinates.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f64,
    /// Vertical position of the top-left corner.
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its origin and size.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The same rectangle moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// [§ 6 The DOMRect interfaces](https://www.w3.org/TR/geometry-1/#DOMRect)
///
/// The edge form returned by `getBoundingClientRect()`: coordinates are
/// relative to the viewport's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DomRect {
    /// "The top attribute must return min(y coordinate, y coordinate + height dimension)"
    pub top: f64,
    /// "The left attribute must return min(x coordinate, x coordinate + width dimension)"
    pub left: f64,
    /// "The bottom attribute must return max(y coordinate, y coordinate + height dimension)"
    pub bottom: f64,
    /// "The right attribute must return max(x coordinate, x coordinate + width dimension)"
    pub right: f64,
    /// Width dimension.
    pub width: f64,
    /// Height dimension.
    pub height: f64,
}

impl DomRect {
    /// Build the edge form of a rectangle.
    ///
    /// Negative sizes are normalized the way `DOMRectReadOnly` does: the
    /// edges are ordered and the reported dimensions are non-negative.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let (x0, x1) = ordered(rect.x, rect.x + rect.width);
        let (y0, y1) = ordered(rect.y, rect.y + rect.height);
        Self {
            top: y0,
            left: x0,
            bottom: y1,
            right: x1,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Every field rounded to the nearest integer pixel.
    ///
    /// Non-finite values collapse to 0 and sizes are clamped at 0, so the
    /// result always satisfies the integer-geometry invariant.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            top: round_half_up(self.top),
            left: round_half_up(self.left),
            bottom: round_half_up(self.bottom),
            right: round_half_up(self.right),
            width: round_half_up(self.width).max(0.0),
            height: round_half_up(self.height).max(0.0),
        }
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Round to the nearest integer, ties toward positive infinity.
///
/// This is the rounding used by script engines for layout values, so
/// `-2.5` becomes `-2` while `2.5` becomes `3`. Non-finite input yields 0.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let floor = value.floor();
    // `value - floor` is exact; `value + 0.5` is not.
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_ties() {
        assert!((round_half_up(2.5) - 3.0).abs() < f64::EPSILON);
        assert!((round_half_up(-2.5) - -2.0).abs() < f64::EPSILON);
        assert!((round_half_up(0.499_999_999_999_999_94)).abs() < f64::EPSILON);
        assert!((round_half_up(-0.5)).abs() < f64::EPSILON);
        assert!((round_half_up(-1.5) - -1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rounded_rect_just_below_half() {
        let rect = DomRect {
            top: 0.499_999_999_999_999_94,
            left: 2.499_999_999_999_999_6,
            bottom: 10.5,
            right: 4_503_599_627_370_495.5,
            width: 0.499_999_999_999_999_94,
            height: 1.0,
        }
        .rounded();
        assert!(rect.top.abs() < f64::EPSILON);
        assert!((rect.left - 2.0).abs() < f64::EPSILON);
        assert!((rect.bottom - 11.0).abs() < f64::EPSILON);
        assert!((rect.right - 4_503_599_627_370_496.0).abs() < f64::EPSILON);
        assert!(rect.width.abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_half_up_non_finite() {
        assert!(round_half_up(f64::NAN).abs() < f64::EPSILON);
        assert!(round_half_up(f64::INFINITY).abs() < f64::EPSILON);
    }
}
