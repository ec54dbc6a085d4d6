//! The engine aggregate: one trie, one substring registry, one query path.

use std::collections::HashSet;

use crate::ranker::{rank, DEFAULT_MAX_RESULTS};
use crate::substring::SubstringIndex;
use crate::trie::PrefixTrie;
use crate::types::Suggestion;
use crate::utils::normalize;

/// A weighted dictionary index answering prefix and substring queries.
///
/// Built once by sequential [`insert`](Self::insert) calls, then read-only:
/// queries take `&self`, never mutate, and the whole structure is
/// `Send + Sync`, so a serving layer can share it behind an `Arc`.
/// Re-insertion after serving begins needs external exclusive access; the
/// index itself does not synchronize.
///
/// The normalized term string is the only join between the two inner
/// structures: the trie holds weights, the substring registry holds the
/// term set.
#[derive(Debug, Default, Clone)]
pub struct AutocompleteIndex {
    trie: PrefixTrie,
    substrings: SubstringIndex,
}

impl AutocompleteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Insert one dictionary record.
    ///
    /// Repeated insertions of the same term accumulate weight; the node
    /// graph only grows. There is no delete.
    pub fn insert(&mut self, term: &str, weight: u64) {
        self.trie.insert(term, weight);
        self.substrings.insert(term);
    }

    /// Ranked suggestions for `pattern`, capped at `max_results`.
    ///
    /// A pattern that normalizes to the empty string is a defined empty
    /// result, not an error: completing "" would dump the whole dictionary.
    pub fn query(&self, pattern: &str, max_results: usize) -> Vec<Suggestion> {
        let pattern = normalize(pattern);
        if pattern.is_empty() || max_results == 0 {
            return Vec::new();
        }

        // Category A: prefix completions, weights straight off the trie.
        let prefix_hits = self.trie.complete(&pattern);

        // Category B: containment matches not already claimed by A. Each
        // term scores with its true accumulated weight; the trie is the
        // single source of weight truth.
        let claimed: HashSet<&str> = prefix_hits.iter().map(|(t, _)| t.as_str()).collect();
        let substring_hits: Vec<(String, u64)> = self
            .substrings
            .matching(&pattern)
            .filter(|term| !claimed.contains(term))
            .filter_map(|term| self.trie.weight_of(term).map(|w| (term.to_string(), w)))
            .collect();

        rank(prefix_hits, substring_hits, max_results)
    }

    /// [`query`](Self::query) with the default cap, projected to bare term
    /// strings -- the shape transport layers serialize.
    pub fn suggest(&self, pattern: &str) -> Vec<String> {
        self.query(pattern, DEFAULT_MAX_RESULTS)
            .into_iter()
            .map(|s| s.term)
            .collect()
    }
}
