//! Trimming the owned, mutable sequence kinds.
//!
//! The contract under test: a mutable-kind subject yields a fresh
//! mutable-kind result, the subject itself is never modified, and neither
//! value ever observes later mutations of the other.

use afftrim::CutAffixOwned;

#[test]
fn string_subject_yields_string_result() {
    let subject = String::from("hello\n");
    let trimmed: String = subject.cut_suffix("\n");
    assert_eq!(trimmed, "hello");
    assert_eq!(subject, "hello\n");
}

#[test]
fn vec_subject_yields_vec_result() {
    let subject: Vec<u8> = b"frame\0".to_vec();
    let trimmed: Vec<u8> = subject.cut_suffix(b"\0");
    assert_eq!(trimmed, b"frame");
    assert_eq!(subject, b"frame\0");
}

#[test]
fn empty_suffix_copies_the_subject() {
    let subject = String::from("hello");
    assert_eq!(subject.cut_suffix(""), "hello");
}

#[test]
fn subject_is_never_trimmed_in_place() {
    let subject = String::from("prefix-body");
    let _ = subject.cut_prefix("prefix-");
    assert_eq!(subject, "prefix-body");
}

#[test]
fn later_mutation_of_subject_is_invisible_in_result() {
    let mut subject = b"header:payload".to_vec();
    let payload = subject.cut_prefix(b"header:");
    subject.clear();
    assert_eq!(payload, b"payload");
}

#[test]
fn later_mutation_of_result_is_invisible_in_subject() {
    let subject = b"header:payload".to_vec();
    let mut payload = subject.cut_prefix(b"header:");
    payload.push(b'!');
    assert_eq!(subject, b"header:payload");
}

#[test]
fn string_affix_may_be_borrowed_or_owned() {
    let subject = String::from("v1.2.3");
    assert_eq!(subject.cut_prefix("v"), "1.2.3");
    assert_eq!(subject.cut_prefix(String::from("v")), "1.2.3");
}
