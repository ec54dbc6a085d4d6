//! Ranking order, tie-breaks, and cap enforcement.

use super::common::{index_of, sample_index, terms_of};

#[test]
fn weight_descending_wins() {
    let index = sample_index();
    assert_eq!(terms_of(&index, "ca", 10), vec!["cat", "car", "cart"]);
}

#[test]
fn equal_weights_order_alphabetically() {
    // "ant" and "bat" share weight 2 and no common prefix; pattern "t"
    // reaches both by substring containment only.
    let index = index_of(&[("bat", 2), ("ant", 2)]);
    assert_eq!(terms_of(&index, "t", 10), vec!["ant", "bat"]);
}

#[test]
fn substring_matches_rank_with_true_weight() {
    // A substring hit must carry the term's own accumulated weight, so a
    // heavy containment match outranks a light prefix match.
    let index = index_of(&[("tone", 1), ("stone", 50)]);
    assert_eq!(terms_of(&index, "tone", 10), vec!["stone", "tone"]);
}

#[test]
fn accumulated_weight_drives_ranking() {
    let mut index = index_of(&[("cat", 1), ("car", 3)]);
    // Two more records for "cat" push its total to 5, past "car".
    index.insert("cat", 2);
    index.insert("cat", 2);
    assert_eq!(terms_of(&index, "ca", 10), vec!["cat", "car"]);
}

#[test]
fn cap_is_enforced() {
    let entries: Vec<(String, u64)> = (0..20).map(|i| (format!("alpha{i:02}"), 1)).collect();
    let borrowed: Vec<(&str, u64)> = entries.iter().map(|(t, w)| (t.as_str(), *w)).collect();
    let index = index_of(&borrowed);

    let out = index.query("a", 10);
    assert_eq!(out.len(), 10);
}

#[test]
fn results_are_deterministic() {
    let index = sample_index();
    for _ in 0..5 {
        assert_eq!(index.query("a", 10), index.query("a", 10));
    }
}
