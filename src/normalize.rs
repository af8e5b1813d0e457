//! Cleanup of raw names before ranking.

use crate::core::NormalizedName;

/// Normalize a single raw name.
///
/// Trims surrounding whitespace, deletes every character that is not an
/// ASCII letter and uppercases the rest. Never fails; input made only of
/// non-letters becomes the empty name.
pub fn normalize_name(raw: &str) -> NormalizedName {
    let letters: String = raw
        .trim()
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    NormalizedName::from_letters(letters)
}

/// Normalize every raw name, keeping length and order.
pub fn normalize_names<S: AsRef<str>>(raw: &[S]) -> Vec<NormalizedName> {
    raw.iter().map(|name| normalize_name(name.as_ref())).collect()
}
