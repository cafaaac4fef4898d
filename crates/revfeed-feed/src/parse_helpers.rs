//! Lenient leaf-value parsing shared by the extractors.
//!
//! None of these functions fail. A value that cannot be interpreted becomes
//! `None` (floats) or `0` (integers) so one bad field never drops a record.

/// Parses a decimal that may use a decimal comma (`"4,5"`).
///
/// Returns `None` for empty, malformed, or non-finite input.
pub(crate) fn parse_float(raw: &str) -> Option<f64> {
    raw.replace(',', ".")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parses a whole number, falling back to `0` for empty or malformed input.
pub(crate) fn parse_int(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}

/// Collapses every whitespace run to a single space and trims both ends.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
