//! Analyzer configuration.
//!
//! Each policy decides how the analyzer treats input the Googlon rules do not
//! cover. The defaults are the strict choices: reject foreign letters, abort on
//! malformed words, and strip the trailing line terminator.

use googlon_foundation::alphabet::{first_foreign_byte, rank};
use googlon_foundation::{Error, Result};

/// How letters outside the Googlon alphabet are ranked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlphabetPolicy {
    /// Foreign letters are an `OutOfAlphabet` error.
    #[default]
    Strict,
    /// Foreign letters rank as 0, colliding with `'s'`.
    Lenient,
}

impl AlphabetPolicy {
    /// Checks that `word` can be ranked under this policy.
    ///
    /// # Errors
    ///
    /// Under `Strict`, returns `OutOfAlphabet` for the first foreign letter.
    pub fn check(self, word: &str) -> Result<()> {
        match self {
            Self::Strict => match first_foreign_byte(word) {
                Some((position, byte)) => Err(Error::out_of_alphabet(word, byte, position)),
                None => Ok(()),
            },
            Self::Lenient => Ok(()),
        }
    }
}

/// Rank of `byte`, with foreign letters ranked 0.
///
/// Only meaningful after [`AlphabetPolicy::check`] has passed.
#[must_use]
#[inline]
pub(crate) fn rank_or_zero(byte: u8) -> u8 {
    rank(byte).unwrap_or(0)
}

/// What the analyzer does with a word that cannot be indexed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MalformedWordPolicy {
    /// Fail the whole analysis.
    #[default]
    Abort,
    /// Drop the word and keep going.
    Skip,
}

/// Whether a trailing `\n` / `\r\n` is removed before splitting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineTerminatorPolicy {
    /// Remove one trailing line terminator.
    #[default]
    Strip,
    /// Leave it attached to the last word.
    Keep,
}

/// Configuration for an [`Analyzer`](crate::Analyzer).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalyzerConfig {
    /// Ranking of foreign letters.
    pub alphabet: AlphabetPolicy,
    /// Handling of malformed words.
    pub malformed: MalformedWordPolicy,
    /// Handling of the trailing line terminator.
    pub line_terminator: LineTerminatorPolicy,
}

impl AnalyzerConfig {
    /// Creates the default (strict) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that reproduces the classic behaviour: foreign letters
    /// rank 0 and the line terminator stays on the last word.
    #[must_use]
    pub fn compat() -> Self {
        Self {
            alphabet: AlphabetPolicy::Lenient,
            malformed: MalformedWordPolicy::Abort,
            line_terminator: LineTerminatorPolicy::Keep,
        }
    }

    /// Sets the alphabet policy.
    #[must_use]
    pub const fn with_alphabet(mut self, policy: AlphabetPolicy) -> Self {
        self.alphabet = policy;
        self
    }

    /// Sets the malformed-word policy.
    #[must_use]
    pub const fn with_malformed(mut self, policy: MalformedWordPolicy) -> Self {
        self.malformed = policy;
        self
    }

    /// Sets the line-terminator policy.
    #[must_use]
    pub const fn with_line_terminator(mut self, policy: LineTerminatorPolicy) -> Self {
        self.line_terminator = policy;
        self
    }
}
