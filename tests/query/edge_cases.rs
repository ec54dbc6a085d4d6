//! Boundary behavior: empty patterns, misses, zero caps, empty indexes.

use typeahead::AutocompleteIndex;

use super::common::{sample_index, terms_of};

#[test]
fn empty_pattern_returns_nothing() {
    let index = sample_index();
    assert!(index.query("", 10).is_empty());
    assert!(index.query("   ", 10).is_empty());
}

#[test]
fn unmatched_prefix_returns_nothing() {
    let index = sample_index();
    assert!(index.query("zz", 10).is_empty());
}

#[test]
fn pattern_longer_than_every_term_returns_nothing() {
    let index = sample_index();
    assert!(index.query("bananananana", 10).is_empty());
}

#[test]
fn exact_term_is_its_own_completion() {
    let index = sample_index();
    assert_eq!(terms_of(&index, "banana", 10), vec!["banana"]);
}

#[test]
fn zero_cap_returns_nothing() {
    let index = sample_index();
    assert!(index.query("ca", 0).is_empty());
}

#[test]
fn empty_index_answers_everything_with_nothing() {
    let index = AutocompleteIndex::new();
    assert!(index.is_empty());
    assert!(index.query("a", 10).is_empty());
    assert!(index.query("", 10).is_empty());
}

#[test]
fn substring_match_without_any_prefix_match() {
    let index = sample_index();
    assert_eq!(terms_of(&index, "nan", 10), vec!["banana"]);
}
