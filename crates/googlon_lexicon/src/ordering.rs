//! Googlon lexicographic order.
//!
//! Words are compared letter by letter using alphabet ranks rather than byte
//! values. When one word is a prefix of the other, the shorter word comes
//! first.

use std::cmp::Ordering;

use googlon_foundation::Result;

use crate::config::{AlphabetPolicy, rank_or_zero};

/// Compares two words in Googlon order.
///
/// # Errors
///
/// Returns `OutOfAlphabet` under [`AlphabetPolicy::Strict`] if either word
/// has a foreign letter.
pub fn compare(a: &str, b: &str, policy: AlphabetPolicy) -> Result<Ordering> {
    policy.check(a)?;
    policy.check(b)?;
    Ok(compare_ranked(a, b))
}

/// Compares two already-checked words by their rank sequences.
///
/// Under the lenient policy every foreign letter ranks 0, so distinct words
/// with the same rank sequence compare `Equal`. Comparing whole sequences
/// keeps that a total preorder, which `sort_by` requires.
pub(crate) fn compare_ranked(a: &str, b: &str) -> Ordering {
    a.bytes().map(rank_or_zero).cmp(b.bytes().map(rank_or_zero))
}

/// Sorts `words` in place in Googlon order.
///
/// The sort is stable: words that compare `Equal` (only possible under the
/// lenient policy) keep their relative order.
///
/// # Errors
///
/// Returns `OutOfAlphabet` under [`AlphabetPolicy::Strict`] if any word has a
/// foreign letter. The slice is left untouched in that case.
pub fn sort_vocabulary<S: AsRef<str>>(words: &mut [S], policy: AlphabetPolicy) -> Result<()> {
    for word in words.iter() {
        policy.check(word.as_ref())?;
    }
    words.sort_by(|a, b| compare_ranked(a.as_ref(), b.as_ref()));
    Ok(())
}

/// Returns true if `words` is already in Googlon order.
#[must_use]
pub fn is_sorted<S: AsRef<str>>(words: &[S]) -> bool {
    words
        .windows(2)
        .all(|pair| compare_ranked(pair[0].as_ref(), pair[1].as_ref()) != Ordering::Greater)
}
