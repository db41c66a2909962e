//! Word validation tests.

use googlon_foundation::{ErrorKind, Word};

#[test]
fn words_are_byte_wise() {
    let word = Word::new("hej\n").unwrap();
    assert_eq!(word.len(), 4);
    assert_eq!(word.last(), b'\n');
}

#[test]
fn empty_is_invalid() {
    let err = Word::try_from("").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidWord { .. }));
}

#[test]
fn words_hash_by_content() {
    use std::collections::HashSet;

    let text = String::from("hej hej");
    let set: HashSet<Word<'_>> = text.split(' ').map(|s| Word::new(s).unwrap()).collect();
    assert_eq!(set.len(), 1);
}
