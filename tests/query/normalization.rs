//! Case folding applies to both sides of every match.

use typeahead::AutocompleteIndex;

use super::common::terms_of;

#[test]
fn mixed_case_insert_surfaces_canonical_form() {
    let mut index = AutocompleteIndex::new();
    index.insert("Apple", 3);
    // Canonical lowercase comes back, never the raw spelling.
    assert_eq!(terms_of(&index, "app", 10), vec!["apple"]);
}

#[test]
fn mixed_case_query_matches() {
    let mut index = AutocompleteIndex::new();
    index.insert("apple", 3);
    assert_eq!(terms_of(&index, "APP", 10), vec!["apple"]);
    assert_eq!(terms_of(&index, "ApP", 10), vec!["apple"]);
}

#[test]
fn case_variants_accumulate_into_one_term() {
    let mut index = AutocompleteIndex::new();
    index.insert("Apple", 3);
    index.insert("APPLE", 2);
    index.insert("apple", 1);

    assert_eq!(index.len(), 1);
    let out = index.query("apple", 10);
    assert_eq!(out[0].weight, 6);
}

#[test]
fn phrase_whitespace_collapses() {
    let mut index = AutocompleteIndex::new();
    index.insert("New   York", 7);
    assert_eq!(terms_of(&index, "new y", 10), vec!["new york"]);
    assert_eq!(terms_of(&index, "w yo", 10), vec!["new york"]);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn diacritics_fold_into_ascii() {
    let mut index = AutocompleteIndex::new();
    index.insert("café", 2);
    assert_eq!(terms_of(&index, "cafe", 10), vec!["cafe"]);
}
