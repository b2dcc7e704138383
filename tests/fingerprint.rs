use itemprint::fingerprint::{fingerprint, fingerprint_all};
use itemprint::matcher::find_matches;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn empty_text_hashes_to_zero() {
    assert_eq!(fingerprint(""), "0");
}

#[test]
fn pinned_tokens_match_32bit_rolling_hash() {
    assert_eq!(fingerprint("a"), "2p");
    assert_eq!(fingerprint("abc"), "22ci");
    assert_eq!(fingerprint("hello world"), "to5x38");
    assert_eq!(fingerprint("apple"), "1jdxsq");
    assert_eq!(fingerprint("banana"), "1bxrbdx");
}

#[test]
fn negative_accumulator_is_read_as_unsigned() {
    assert_eq!(
        fingerprint("The quick brown fox jumps over the lazy dog"),
        "10l20s3"
    );
}

#[test]
fn hashes_utf16_code_units() {
    assert_eq!(fingerprint("é"), "6h");
    assert_eq!(fingerprint("😀"), "11zz7");
}

#[test]
fn fingerprint_ignores_case() {
    for text in ["abc", "Hello World", "MiXeD 123", "ΣΑΣ", ""] {
        let lower = fingerprint(&text.to_lowercase());
        assert_eq!(fingerprint(text), lower);
        assert_eq!(fingerprint(&text.to_uppercase()), lower);
    }
    assert_eq!(fingerprint("ABC"), fingerprint("abc"));
}

#[test]
fn fingerprint_is_deterministic() {
    let text = "a fairly long item that overflows the accumulator many times over";
    assert_eq!(fingerprint(text), fingerprint(text));
}

#[test]
fn fingerprint_all_keeps_order_and_duplicates() {
    let tokens = fingerprint_all(["abc", "a", "abc"]);
    assert_eq!(tokens, strings(&["22ci", "2p", "22ci"]));
}

#[test]
fn items_match_their_own_tokens() {
    let items = strings(&["apple", "Banana", "cherry pie", "apple"]);
    assert_eq!(find_matches(&items, fingerprint_all(&items)), items);
}

#[test]
fn empty_token_set_matches_nothing() {
    let items = strings(&["apple", "banana"]);
    let tokens: Vec<String> = Vec::new();
    assert!(find_matches(&items, &tokens).is_empty());
}

#[test]
fn empty_item_list_matches_nothing() {
    let items: Vec<String> = Vec::new();
    assert!(find_matches(&items, fingerprint_all(["apple"])).is_empty());
}

#[test]
fn result_follows_item_order() {
    let matches = find_matches(["b", "a"], fingerprint_all(["a", "b"]));
    assert_eq!(matches, strings(&["b", "a"]));
}

#[test]
fn duplicate_tokens_do_not_duplicate_items() {
    let matches = find_matches(["a"], fingerprint_all(["a", "a"]));
    assert_eq!(matches, strings(&["a"]));
}

#[test]
fn matching_is_case_insensitive_and_keeps_original_text() {
    let matches = find_matches(["APPLE", "kiwi"], fingerprint_all(["apple"]));
    assert_eq!(matches, strings(&["APPLE"]));
}
