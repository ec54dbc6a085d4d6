//! String normalization shared by the index and every query path.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a term or query pattern to its canonical matching form.
///
/// Insertion and lookup must agree on one spelling, so both funnel through
/// here. "Apple" and "apple" index identically, and with the
/// `unicode-normalization` feature "café" matches "cafe":
///
/// 1. NFD normalize (split characters into base + combining marks)
/// 2. Drop the combining marks
/// 3. Lowercase
/// 4. Collapse interior whitespace to single spaces
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

/// Fallback without the `unicode-normalization` feature: lowercase and
/// collapse whitespace only. Assumes ASCII or pre-normalized input.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining marks (Unicode category Mn) dropped during normalization.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
