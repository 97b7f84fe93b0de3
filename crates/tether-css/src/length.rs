//! Length extraction from serialized CSS values.
//!
//! Computed margins come back as strings (`"12px"`, `"-4.5px"`, `"auto"`).
//! Consumers only need the integer pixel part, read the way script code
//! reads it with `parseInt`.

/// Read the leading integer of a serialized value.
///
/// Skips leading whitespace, accepts one optional sign, then consumes ASCII
/// digits and stops at the first non-digit. Returns `None` when no digit is
/// found, so `"auto"`, `""`, and `"-"` all fail.
///
/// ```
/// use tether_css::parse_int;
/// assert_eq!(parse_int("12.7px"), Some(12));
/// assert_eq!(parse_int("  -4px"), Some(-4));
/// assert_eq!(parse_int("auto"), None);
/// ```
#[must_use]
pub fn parse_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    // Saturate rather than fail on absurdly long digit runs.
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// "The 'margin' property is a shorthand property for setting 'margin-top',
/// 'margin-right', 'margin-bottom', and 'margin-left' at the same place."
///
/// Returns the component values in `[top, right, bottom, left]` order, or
/// `None` when the shorthand does not have one to four components.
#[must_use]
pub fn parse_margin_shorthand(value: &str) -> Option<[String; 4]> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let [top, right, bottom, left] = match parts.as_slice() {
        // "If there is only one component value, it applies to all sides."
        [all] => [*all, *all, *all, *all],
        // "If there are two values, the top and bottom margins are set to the
        // first value and the right and left margins are set to the second."
        [vertical, horizontal] => [*vertical, *horizontal, *vertical, *horizontal],
        // "If there are three values, the top is set to the first value, the
        // left and right are set to the second, and the bottom is set to the third."
        [top, horizontal, bottom] => [*top, *horizontal, *bottom, *horizontal],
        // "If there are four values, they apply to the top, right, bottom, and
        // left, respectively."
        [top, right, bottom, left] => [*top, *right, *bottom, *left],
        _ => return None,
    };
    Some([
        top.to_string(),
        right.to_string(),
        bottom.to_string(),
        left.to_string(),
    ])
}
