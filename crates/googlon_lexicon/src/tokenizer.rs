//! Text tokenization.
//!
//! Googlon text is split on the literal space character and nothing else:
//! consecutive spaces produce empty words, and tabs or punctuation stay inside
//! the word they touch.

use std::str::Split;

use crate::config::LineTerminatorPolicy;

/// The only word separator.
pub const SEPARATOR: char = ' ';

/// Splits text into words.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tokenizer {
    line_terminator: LineTerminatorPolicy,
}

impl Tokenizer {
    /// Creates a tokenizer with the given line-terminator policy.
    #[must_use]
    pub const fn new(line_terminator: LineTerminatorPolicy) -> Self {
        Self { line_terminator }
    }

    /// Splits `text` into words, applying the line-terminator policy first.
    ///
    /// Always yields at least one (possibly empty) word.
    pub fn tokenize<'t>(&self, text: &'t str) -> Split<'t, char> {
        let text = match self.line_terminator {
            LineTerminatorPolicy::Strip => strip_line_terminator(text),
            LineTerminatorPolicy::Keep => text,
        };
        text.split(SEPARATOR)
    }
}

/// Removes a single trailing `\n` or `\r\n`.
#[must_use]
pub fn strip_line_terminator(text: &str) -> &str {
    text.strip_suffix('\n')
        .map_or(text, |t| t.strip_suffix('\r').unwrap_or(t))
}
