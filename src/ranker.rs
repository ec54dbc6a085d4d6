//! Candidate merging and ranking.
//!
//! Two candidate sets feed every query: prefix completions (category A) and
//! substring containment hits (category B). This module owns the merge
//! policy: A wins membership ties, ordering is (weight descending, term
//! ascending), and the output never exceeds the cap.

use std::collections::HashSet;

use crate::types::{MatchSource, Suggestion};

/// Result cap applied when the caller does not pass an explicit one.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Merge, dedupe, order, truncate.
///
/// Both sets arrive as `(term, weight)` pairs with the term's true
/// accumulated weight already resolved. A term present in both sets keeps
/// its prefix identity and appears exactly once. The sort is total --
/// weight ties fall back to lexical order -- so output is deterministic
/// regardless of the hash-map iteration order upstream.
pub fn rank(
    prefix_hits: Vec<(String, u64)>,
    substring_hits: Vec<(String, u64)>,
    max_results: usize,
) -> Vec<Suggestion> {
    let mut merged: Vec<Suggestion> =
        Vec::with_capacity(prefix_hits.len() + substring_hits.len());
    let mut seen: HashSet<String> = HashSet::with_capacity(merged.capacity());

    for (term, weight) in prefix_hits {
        if seen.insert(term.clone()) {
            merged.push(Suggestion::new(term, weight, MatchSource::Prefix));
        }
    }
    for (term, weight) in substring_hits {
        if seen.insert(term.clone()) {
            merged.push(Suggestion::new(term, weight, MatchSource::Substring));
        }
    }

    merged.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.term.cmp(&b.term)));
    merged.truncate(max_results);
    merged
}
