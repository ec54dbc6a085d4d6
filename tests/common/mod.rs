//! Shared test utilities and fixtures.

#![allow(dead_code)]

use typeahead::AutocompleteIndex;

// Re-export canonical test utilities from typeahead::testing
pub use typeahead::testing::index_of;

/// The small dictionary most query tests run against.
pub fn sample_index() -> AutocompleteIndex {
    index_of(&[
        ("cat", 5),
        ("car", 3),
        ("cart", 1),
        ("banana", 4),
        ("ant", 2),
        ("bat", 2),
    ])
}

/// Collect just the term strings out of a query.
pub fn terms_of(index: &AutocompleteIndex, pattern: &str, cap: usize) -> Vec<String> {
    index
        .query(pattern, cap)
        .into_iter()
        .map(|s| s.term)
        .collect()
}
