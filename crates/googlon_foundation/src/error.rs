//! Error types for the Googlon system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for Googlon operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid word error.
    #[must_use]
    pub fn invalid_word(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidWord {
            reason: reason.into(),
        })
    }

    /// Creates an out-of-alphabet error for the byte at `position` in `word`.
    #[must_use]
    pub fn out_of_alphabet(word: impl Into<String>, byte: u8, position: usize) -> Self {
        Self::new(ErrorKind::OutOfAlphabet {
            word: word.into(),
            byte,
            position,
        })
    }

    /// Creates a numeral overflow error.
    #[must_use]
    pub fn numeral_overflow(word: impl Into<String>) -> Self {
        Self::new(ErrorKind::NumeralOverflow { word: word.into() })
    }

    /// Returns true if this error was caused by a single malformed word.
    #[must_use]
    pub const fn is_word_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidWord { .. }
                | ErrorKind::OutOfAlphabet { .. }
                | ErrorKind::NumeralOverflow { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Word cannot be indexed (currently only the empty word).
    #[error("invalid word: {reason}")]
    InvalidWord {
        /// Why the word was rejected.
        reason: String,
    },

    /// A byte has no rank in the Googlon alphabet.
    #[error("letter {} at position {position} of {word:?} is not in the Googlon alphabet", describe_byte(.byte))]
    OutOfAlphabet {
        /// The word containing the byte.
        word: String,
        /// The offending byte.
        byte: u8,
        /// Byte offset within the word.
        position: usize,
    },

    /// Decoded numeral does not fit in an `i64`.
    #[error("numeral overflow: {word:?} does not fit in a 64-bit integer")]
    NumeralOverflow {
        /// The word being decoded.
        word: String,
    },

    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Rendering a report failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Renders a byte as a quoted char when printable, hex otherwise.
fn describe_byte(byte: &u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", char::from(*byte))
    } else {
        format!("0x{byte:02x}")
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Input source (file name, `<stdin>`, `<repl>`).
    pub source: Option<String>,
    /// Line number in source (1-indexed).
    pub line: Option<usize>,
    /// Index of the word within the text (0-indexed).
    pub word_index: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the word index.
    #[must_use]
    pub fn with_word_index(mut self, index: usize) -> Self {
        self.word_index = Some(index);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
            wrote = true;
        }
        if let Some(index) = self.word_index {
            if wrote {
                write!(f, ", ")?;
            }
            write!(f, "word #{index}")?;
        }
        Ok(())
    }
}

/// Result alias for Googlon operations.
pub type Result<T> = std::result::Result<T, Error>;
