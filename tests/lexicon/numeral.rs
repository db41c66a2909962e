//! Numeral decoder tests.

use googlon_foundation::{ErrorKind, Word};
use googlon_lexicon::{AlphabetPolicy, is_pretty_number, word_to_number};

fn w(s: &str) -> Word<'_> {
    Word::new(s).unwrap()
}

#[test]
fn word_to_number_examples() {
    let cases = [
        ("gxjrc", 605_637),
        ("meofh", 1_833_046),
        ("hej", 5851),
        ("dcnql", 2_114_076),
    ];
    for (word, expected) in cases {
        assert_eq!(
            word_to_number(w(word), AlphabetPolicy::Strict).unwrap(),
            expected,
            "{word}"
        );
    }
}

#[test]
fn pretty_number_examples() {
    let cases = [
        ("gxjrc", true),
        ("meofh", false),
        ("hej", false),
        ("dcnql", true),
    ];
    for (word, expected) in cases {
        assert_eq!(
            is_pretty_number(w(word), AlphabetPolicy::Strict).unwrap(),
            expected,
            "{word}"
        );
    }
}

#[test]
fn largest_fourteen_letter_word_fits() {
    let value = word_to_number(w(&"i".repeat(14)), AlphabetPolicy::Strict).unwrap();
    assert_eq!(value, 20i64.pow(14) - 1);
}

#[test]
fn foreign_letter_policy() {
    let word = w("gxjrC");
    let err = word_to_number(word, AlphabetPolicy::Strict).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OutOfAlphabet { position: 4, .. }));

    // Lenient: 'C' ranks as 's' (0), dropping the top digit of gxjrc.
    assert_eq!(
        word_to_number(word, AlphabetPolicy::Lenient).unwrap(),
        605_637 - 3 * 20i64.pow(4)
    );
}
