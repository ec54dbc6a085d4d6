//! A term must appear exactly once no matter how many modes match it.

use std::collections::HashSet;

use typeahead::MatchSource;

use super::common::{index_of, sample_index};

#[test]
fn prefix_and_substring_never_duplicate() {
    // "anna" starts with "an" AND contains it; "banana" only contains it.
    let index = index_of(&[("anna", 2), ("banana", 4)]);
    let out = index.query("an", 10);

    let terms: Vec<&str> = out.iter().map(|s| s.term.as_str()).collect();
    let unique: HashSet<&str> = terms.iter().copied().collect();
    assert_eq!(terms.len(), unique.len());
    assert_eq!(terms, vec!["banana", "anna"]);
}

#[test]
fn dual_mode_match_keeps_prefix_identity() {
    let index = index_of(&[("anna", 2), ("banana", 4)]);
    let out = index.query("an", 10);

    let anna = out.iter().find(|s| s.term == "anna").unwrap();
    assert_eq!(anna.source, MatchSource::Prefix);
    let banana = out.iter().find(|s| s.term == "banana").unwrap();
    assert_eq!(banana.source, MatchSource::Substring);
}

#[test]
fn every_query_output_is_duplicate_free() {
    let index = sample_index();
    for pattern in ["a", "b", "c", "t", "an", "ca", "cat", "nan"] {
        let out = index.query(pattern, 10);
        let unique: HashSet<&str> = out.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(unique.len(), out.len(), "duplicates for pattern {pattern:?}");
    }
}
