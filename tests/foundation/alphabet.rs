//! Alphabet table tests.

use googlon_foundation::alphabet::{FOO_LETTERS, LETTERS, RADIX, is_foo_letter, is_letter, rank};

#[test]
fn twenty_letters() {
    assert_eq!(LETTERS.len(), usize::from(RADIX));
}

#[test]
fn rank_matches_position() {
    for (position, &letter) in LETTERS.iter().enumerate() {
        assert_eq!(rank(letter).map(usize::from), Some(position));
    }
}

#[test]
fn foo_letters_are_googlon_letters() {
    for &letter in &FOO_LETTERS {
        assert!(is_letter(letter));
        assert!(is_foo_letter(letter));
    }
}

#[test]
fn no_case_folding() {
    for &letter in &LETTERS {
        let upper = letter.to_ascii_uppercase();
        assert_eq!(rank(upper), None);
        assert!(!is_foo_letter(upper));
    }
}

#[test]
fn missing_letters() {
    // The six ASCII lowercase letters the alphabet leaves out.
    for &letter in b"abktvz" {
        assert!(!is_letter(letter));
    }
}
