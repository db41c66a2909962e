//! Validated Googlon words.

use std::fmt;

use crate::error::{Error, Result};

/// A non-empty word, borrowed from the analyzed text.
///
/// Words are compared and indexed byte-wise: no normalization, no case
/// folding. Non-emptiness is checked once at construction so that
/// first/last-letter lookups cannot fail afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Word<'a>(&'a str);

impl<'a> Word<'a> {
    /// Creates a word from a string slice.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWord` if `text` is empty.
    pub fn new(text: &'a str) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::invalid_word("empty word"));
        }
        Ok(Self(text))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// Returns the word's bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.0.as_bytes()
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `str`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// First byte of the word.
    #[must_use]
    pub const fn first(&self) -> u8 {
        self.0.as_bytes()[0]
    }

    /// Last byte of the word.
    #[must_use]
    pub const fn last(&self) -> u8 {
        let bytes = self.0.as_bytes();
        bytes[bytes.len() - 1]
    }

    /// Returns true if the word contains `byte`.
    #[must_use]
    pub fn contains(&self, byte: u8) -> bool {
        self.0.as_bytes().contains(&byte)
    }
}

impl<'a> TryFrom<&'a str> for Word<'a> {
    type Error = Error;

    fn try_from(text: &'a str) -> Result<Self> {
        Self::new(text)
    }
}

impl AsRef<str> for Word<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for Word<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
