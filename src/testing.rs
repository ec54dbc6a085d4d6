//! Canonical fixtures shared by unit tests, integration tests, and benches.

use crate::index::AutocompleteIndex;

/// Build an index from `(term, weight)` pairs.
pub fn index_of(entries: &[(&str, u64)]) -> AutocompleteIndex {
    let mut index = AutocompleteIndex::new();
    for (term, weight) in entries {
        index.insert(term, *weight);
    }
    index
}
