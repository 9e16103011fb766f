//! Conversion between display text and numeric values.
//!
//! The display is locale-free: ASCII digits, an optional leading `-` and at
//! most one `.`. Non-finite results are shown as fixed sentinels.

/// Sentinel shown for positive infinity.
pub const INFINITY: &str = "Infinity";
/// Sentinel shown for negative infinity.
pub const NEG_INFINITY: &str = "-Infinity";
/// Sentinel shown for not-a-number.
pub const NAN: &str = "NaN";

/// Render a value for the display.
///
/// Both zeros render as `"0"`. Finite values use the shortest decimal form
/// that parses back to the same `f64`, never exponent notation.
///
/// # Example
///
/// ```rust
/// use calcpad::core::render;
///
/// assert_eq!(render(14.0), "14");
/// assert_eq!(render(0.5), "0.5");
/// assert_eq!(render(-0.0), "0");
/// assert_eq!(render(f64::INFINITY), "Infinity");
/// ```
pub fn render(value: f64) -> String {
    if value.is_nan() {
        NAN.to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            INFINITY.to_string()
        } else {
            NEG_INFINITY.to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Parse display text, falling back to `0` for anything unparseable.
///
/// Intermediate entry states parse leniently: `"5."` is `5`, a bare `"-"`
/// is `0`. The sentinels produced by [`render`] parse back to their values.
pub fn parse(display: &str) -> f64 {
    match display {
        INFINITY => f64::INFINITY,
        NEG_INFINITY => f64::NEG_INFINITY,
        NAN => f64::NAN,
        text if is_literal(text) => text.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Whether the text is a numeric literal under composition or complete.
///
/// Accepts digits with an optional leading `-` and at most one `.`,
/// including the intermediate forms `"-"` and `"12."`. Sentinels are not
/// literals: digit entry cannot extend them.
pub fn is_literal(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    let mut dots = 0;
    for b in body.bytes() {
        match b {
            b'0'..=b'9' => {}
            b'.' => dots += 1,
            _ => return false,
        }
    }
    dots <= 1 && !text.is_empty()
}

/// Whether the text is a non-finite sentinel.
pub fn is_sentinel(text: &str) -> bool {
    matches!(text, INFINITY | NEG_INFINITY | NAN)
}
