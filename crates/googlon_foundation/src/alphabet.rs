//! The fixed Googlon alphabet.
//!
//! Two process-wide tables drive every rule in the language:
//!
//! - the rank table, which orders the 20 Googlon letters and doubles as the
//!   digit value of each letter in base-20 numerals
//! - the foo-letter set, a closed set of marker letters used by the
//!   classification predicates
//!
//! Both are `const` lookup tables indexed by byte. Letters outside the rank
//! table have no rank; lookups return `None` rather than defaulting to zero.

/// The Googlon letters in rank order (`'s'` has rank 0, `'i'` has rank 19).
pub const LETTERS: [u8; 20] = *b"sxocqnmwpfyheljrdgui";

/// The foo letters.
pub const FOO_LETTERS: [u8; 7] = *b"udxsmpf";

/// Number of letters in the alphabet, which is also the numeral base.
pub const RADIX: u8 = 20;

const NO_RANK: u8 = u8::MAX;

const RANKS: [u8; 256] = build_ranks();

const FOO: [bool; 256] = build_foo();

#[allow(clippy::cast_possible_truncation)]
const fn build_ranks() -> [u8; 256] {
    let mut table = [NO_RANK; 256];
    let mut i = 0;
    while i < LETTERS.len() {
        table[LETTERS[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const fn build_foo() -> [bool; 256] {
    let mut table = [false; 256];
    let mut i = 0;
    while i < FOO_LETTERS.len() {
        table[FOO_LETTERS[i] as usize] = true;
        i += 1;
    }
    table
}

/// Returns the rank of `byte` in the Googlon alphabet, or `None` if the byte
/// is not a Googlon letter.
#[must_use]
#[inline]
pub const fn rank(byte: u8) -> Option<u8> {
    match RANKS[byte as usize] {
        NO_RANK => None,
        r => Some(r),
    }
}

/// Returns true if `byte` is one of the 20 Googlon letters.
#[must_use]
#[inline]
pub const fn is_letter(byte: u8) -> bool {
    RANKS[byte as usize] != NO_RANK
}

/// Returns true if `byte` is a foo letter.
#[must_use]
#[inline]
pub const fn is_foo_letter(byte: u8) -> bool {
    FOO[byte as usize]
}

/// Returns the position of the first byte in `word` that is not a Googlon
/// letter, together with the byte itself.
#[must_use]
pub fn first_foreign_byte(word: &str) -> Option<(usize, u8)> {
    word.bytes().enumerate().find(|&(_, b)| !is_letter(b))
}
