//! Per-term substring containment.
//!
//! The engine's second matching mode: does the pattern occur anywhere
//! inside the term, not just at the front. One entry per inserted term,
//! fixed at insertion time. A lookup scans the candidate terms with
//! `str::contains` (two-way search) after an O(1) length reject; nothing is
//! recomputed per query beyond that scan.
//!
//! Suffix-per-term structures answer the same predicate by prefix-matching
//! the pattern against every suffix, at quadratic build cost per term. For
//! dictionary-sized terms the direct scan is both simpler and faster.

use std::collections::HashMap;

use crate::utils::normalize;

/// Per-term data fixed at insertion time.
#[derive(Debug, Clone)]
struct TermEntry {
    /// Character count; patterns longer than this cannot match.
    chars: usize,
}

/// Registry of every indexed term, answering containment queries.
#[derive(Debug, Default, Clone)]
pub struct SubstringIndex {
    entries: HashMap<String, TermEntry>,
}

impl SubstringIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a term. Idempotent; re-inserting the same term is a no-op.
    pub fn insert(&mut self, term: &str) {
        let term = normalize(term);
        if term.is_empty() {
            return;
        }
        let chars = term.chars().count();
        self.entries.entry(term).or_insert(TermEntry { chars });
    }

    /// Every registered term, unordered.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// True iff `pattern` occurs as a contiguous character run anywhere in
    /// the registered `term` (the whole term included).
    pub fn contains(&self, term: &str, pattern: &str) -> bool {
        let term = normalize(term);
        let pattern = normalize(pattern);
        match self.entries.get(&term) {
            Some(entry) => entry.chars >= pattern.chars().count() && term.contains(&pattern),
            None => false,
        }
    }

    /// All registered terms containing `pattern`, unordered.
    ///
    /// `pattern` must already be normalized; the query boundary in
    /// [`crate::AutocompleteIndex::query`] guarantees it.
    pub fn matching<'a>(&'a self, pattern: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let needle_chars = pattern.chars().count();
        self.entries.iter().filter_map(move |(term, entry)| {
            (entry.chars >= needle_chars && term.contains(pattern)).then_some(term.as_str())
        })
    }
}
