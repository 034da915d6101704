//! Display formatting for derived values.
//!
//! Pixel counts render as grouped whole numbers ("3,508"), inches with two
//! decimals. Locale-specific separators stay a presentation concern; the
//! engine's contract is "," grouping and "." decimals.

/// Formats a pixel count: rounded to a whole number, grouped in thousands.
///
/// Scaled exports can be fractional; they round here the same way the 1x
/// values round during conversion.
pub fn format_px(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an inch value with two decimal places.
pub fn format_inches(value: f64) -> String {
    format!("{:.2}", value)
}
