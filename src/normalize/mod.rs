//! Text normalization applied before any component/metadata comparison.
//!
//! Both query component values and candidate metadata fields pass through the
//! same normalization so substring checks are punctuation- and
//! case-insensitive.

/// Strips ASCII punctuation and lowercases the input.
#[inline]
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .to_lowercase()
}

/// Normalizes an optional value; absent maps to the empty string.
#[inline]
pub fn normalize_opt(value: Option<&str>) -> String {
    value.map(normalize).unwrap_or_default()
}
