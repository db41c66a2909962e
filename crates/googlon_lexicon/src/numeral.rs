//! Base-20 numeral decoding.
//!
//! Every Googlon word is also a number. Each letter's digit value is its rank
//! in the alphabet and the least significant digit comes first, so
//! `"gxjrc"` reads as `17 + 1·20 + 14·20² + 15·20³ + 3·20⁴ = 605637`.

use googlon_foundation::alphabet::RADIX;
use googlon_foundation::{Error, Result, Word};

use crate::config::{AlphabetPolicy, rank_or_zero};

/// Smallest value a pretty number may have.
pub const PRETTY_THRESHOLD: i64 = 81_827;

/// Divisor every pretty number is a multiple of.
pub const PRETTY_DIVISOR: u8 = 3;

/// Decodes `word` as a base-20 numeral.
///
/// # Errors
///
/// Returns `OutOfAlphabet` under [`AlphabetPolicy::Strict`] if the word has a
/// foreign letter, and `NumeralOverflow` if the value exceeds `i64::MAX`.
pub fn word_to_number(word: Word<'_>, policy: AlphabetPolicy) -> Result<i64> {
    policy.check(word.as_str())?;

    // Horner's rule from the most significant (last) digit down, so that
    // overflow is only reported for values that really don't fit.
    word.as_bytes().iter().rev().try_fold(0i64, |value, &byte| {
        value
            .checked_mul(i64::from(RADIX))
            .and_then(|v| v.checked_add(i64::from(rank_or_zero(byte))))
            .ok_or_else(|| Error::numeral_overflow(word.as_str()))
    })
}

/// Returns true if `word` decodes to a pretty number: at least
/// [`PRETTY_THRESHOLD`] and divisible by [`PRETTY_DIVISOR`].
///
/// Words whose value does not fit in an `i64` are still classified exactly:
/// anything that large clears the threshold, and divisibility is tracked as a
/// residue alongside the (saturating) value.
///
/// # Errors
///
/// Returns `OutOfAlphabet` under [`AlphabetPolicy::Strict`] if the word has a
/// foreign letter.
pub fn is_pretty_number(word: Word<'_>, policy: AlphabetPolicy) -> Result<bool> {
    policy.check(word.as_str())?;

    let radix_residue = RADIX % PRETTY_DIVISOR;
    let mut value = 0i64;
    let mut residue = 0u8;
    for &byte in word.as_bytes().iter().rev() {
        let digit = rank_or_zero(byte);
        value = value
            .saturating_mul(i64::from(RADIX))
            .saturating_add(i64::from(digit));
        residue = (residue * radix_residue + digit) % PRETTY_DIVISOR;
    }

    Ok(value >= PRETTY_THRESHOLD && residue == 0)
}
