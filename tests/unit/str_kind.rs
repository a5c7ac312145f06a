//! Trimming character sequences.

use afftrim::{cut_prefix, cut_suffix, CutAffix};

#[test]
fn prefix_removed_when_present() {
    assert_eq!(cut_prefix("test_case", "test_"), "case");
    assert_eq!(cut_prefix("foo.bar", "foo."), "bar");
}

#[test]
fn prefix_must_match_literally() {
    // "testcase" does not contain the underscore, so nothing is removed.
    assert_eq!(cut_prefix("testcase", "test_"), "testcase");
}

#[test]
fn prefix_on_empty_subject() {
    assert_eq!(cut_prefix("", "x"), "");
}

#[test]
fn empty_prefix_removes_nothing() {
    assert_eq!(cut_prefix("hello", ""), "hello");
}

#[test]
fn suffix_removed_when_present() {
    assert_eq!(cut_suffix("hello\n", "\n"), "hello");
    assert_eq!(cut_suffix("FooTests", "Tests"), "Foo");
}

#[test]
fn suffix_absent_leaves_subject() {
    assert_eq!(cut_suffix("MixinTests", "Suite"), "MixinTests");
    assert_eq!(cut_suffix("hello", "hello!"), "hello");
}

#[test]
fn empty_suffix_yields_subject_not_empty_string() {
    // A slice computed as `&s[..s.len() - suffix.len()]` handles this case
    // too, but formulations based on cutting "the last zero elements" from
    // the back have historically collapsed to "". Pin the behavior.
    assert_eq!(cut_suffix("hello", ""), "hello");
}

#[test]
fn interior_occurrences_are_ignored() {
    assert_eq!(cut_prefix("abcabc", "bc"), "abcabc");
    assert_eq!(cut_suffix("abcabc", "ab"), "abcabc");
}

#[test]
fn removal_is_single_shot() {
    let once = cut_suffix("x.tar.tar", ".tar");
    assert_eq!(once, "x.tar");
    // A second application with the same affix trims again only because the
    // affix recurs at the new edge; nothing ever loops internally.
    assert_eq!(cut_suffix(once, ".tar"), "x");
}

#[test]
fn idempotent_when_affix_does_not_recur() {
    let once = cut_prefix("prefix-body", "prefix-");
    assert_eq!(cut_prefix(once, "prefix-"), once);
}

#[test]
fn chained_cuts_unquote() {
    assert_eq!(cut_prefix(cut_suffix("\"value\"", "\""), "\""), "value");
}

#[test]
fn chained_cuts_are_order_sensitive() {
    let s = "abba";
    assert_eq!(cut_suffix(cut_prefix(s, "ab"), "ba"), "");
    assert_eq!(cut_prefix(cut_suffix(s, "ba"), "ba"), "ab");
}

#[test]
fn method_form_matches_free_functions() {
    assert_eq!("test_case".cut_prefix("test_"), "case");
    assert_eq!("hello\n".cut_suffix("\n"), "hello");
    assert_eq!("hello".cut_suffix(""), "hello");
}

#[test]
fn method_form_accepts_string_affixes() {
    let prefix = String::from("v");
    assert_eq!("v1.2.3".cut_prefix(&prefix), "1.2.3");
}

#[test]
fn multibyte_text_trims_on_character_boundaries() {
    assert_eq!(cut_prefix("日本語テキスト", "日本語"), "テキスト");
    assert_eq!(cut_suffix("café", "é"), "caf");
    assert_eq!(cut_suffix("café", "e"), "café");
}
