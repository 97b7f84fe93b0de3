//! Declarative placement options supplied per overlay instance.

use serde::{Deserialize, Serialize, Serializer};

/// Flags describing the intended alignment and overflow policy.
///
/// Deserializes from the camelCase option names hosts already use
/// (`offsetX`, `allowOverflow`, ...); every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlacementConfig {
    /// Open upward: bottom edges of overlay and activator line up.
    pub top: bool,
    /// Open leftward: right edges line up when the overlay is wider.
    pub left: bool,
    /// Keep x-overflow correction active even when `left` is set.
    pub right: bool,
    /// Place the overlay beside the activator instead of over it.
    pub offset_x: bool,
    /// Place the overlay above/below the activator instead of over it.
    pub offset_y: bool,
    /// Skip clamping to the visible window vertically.
    pub allow_overflow: bool,
    /// Flip above the activator when overflowing the bottom and there is room.
    pub offset_overflow: bool,
    /// The overlay is rendered in place; its offset comes from its margins.
    pub attach: bool,
    /// Upper bound on the horizontal shift applied by `offset_x` with `left`.
    pub max_width: MaxWidth,
}

/// The `maxWidth` option: a number of pixels, or anything non-numeric.
///
/// Values are coerced the way script `Number()` coerces them: numeric
/// strings (`"240"`, `"0x10"`) count as numbers, as do `null`, blank
/// strings (both 0) and booleans (0 or 1). Strings with units (`"240px"`)
/// and keywords do not. An absent option is non-numeric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "RawMaxWidth")]
pub enum MaxWidth {
    /// Not numeric; the activator width is used instead.
    #[default]
    Auto,
    /// A numeric limit in pixels.
    Px(f64),
}

impl MaxWidth {
    /// Interpret a textual option value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        numeric_value(value).map_or(Self::Auto, Self::Px)
    }

    /// The numeric limit, if any.
    #[must_use]
    pub const fn as_px(self) -> Option<f64> {
        match self {
            Self::Auto => None,
            Self::Px(px) => Some(px),
        }
    }
}

impl Serialize for MaxWidth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Px(px) => serializer.serialize_f64(*px),
        }
    }
}

/// Numeric value of a string: surrounding whitespace is ignored, a blank
/// string is 0, `0x`/`0o`/`0b` prefixes select a radix, and `Infinity` is
/// accepted with an optional sign. Anything else must be a full decimal
/// literal.
fn numeric_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let digits = text
            .strip_prefix(prefix)
            .or_else(|| text.strip_prefix(prefix.to_ascii_uppercase().as_str()));
        if let Some(digits) = digits {
            if digits.is_empty() {
                return None;
            }
            return digits.chars().try_fold(0.0, |acc: f64, c| {
                c.to_digit(radix)
                    .map(|digit| acc.mul_add(f64::from(radix), f64::from(digit)))
            });
        }
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };
    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }
    // Rust also accepts `inf` and `nan` spellings, which are not numbers here.
    if !unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }
    text.parse::<f64>().ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMaxWidth {
    Number(f64),
    Bool(bool),
    Text(String),
    Null,
}

impl From<RawMaxWidth> for MaxWidth {
    fn from(raw: RawMaxWidth) -> Self {
        match raw {
            RawMaxWidth::Number(px) if !px.is_nan() => Self::Px(px),
            RawMaxWidth::Number(_) => Self::Auto,
            RawMaxWidth::Bool(flag) => Self::Px(f64::from(u8::from(flag))),
            RawMaxWidth::Text(text) => Self::parse(&text),
            RawMaxWidth::Null => Self::Px(0.0),
        }
    }
}
