//! The result types queries hand back.

use serde::Serialize;

/// Which matching mode produced a suggestion.
///
/// Prefix wins membership ties: a term reachable both ways is reported
/// once, as a prefix match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    Prefix,
    Substring,
}

/// A ranked completion for a query pattern.
///
/// `term` is the canonical normalized form, never the raw spelling from the
/// dictionary file. `weight` is the term's cumulative frequency across every
/// insertion, which is exactly the value ranking sorts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub term: String,
    pub weight: u64,
    pub source: MatchSource,
}

impl Suggestion {
    pub fn new(term: impl Into<String>, weight: u64, source: MatchSource) -> Self {
        Self {
            term: term.into(),
            weight,
            source,
        }
    }
}
