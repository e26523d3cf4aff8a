//! String normalization shared by every scoring component.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, strip diacritics, and collapse
/// whitespace.
///
/// Queries and catalog fields both pass through here, so "Café Simulator"
/// and " cafe   simulator " compare equal. Diacritic stripping requires the
/// `unicode-normalization` feature (on by default); without it the function
/// only lowercases and collapses whitespace.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight fallback without the `unicode-normalization` dependency.
/// Lowercases and collapses whitespace only; assumes ASCII or pre-normalized
/// input.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining marks have Unicode category Mn (Mark, Nonspacing).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
///
/// Both arguments are expected to be normalized already. An empty needle
/// never matches; "aaaa" contains "aa" twice, not three times.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.match_indices(needle).count()
}
