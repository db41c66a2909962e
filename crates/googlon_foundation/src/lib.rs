//! Alphabet tables, words, and error types for Googlon.
//!
//! This crate provides:
//! - [`alphabet`] - The rank table and foo-letter set
//! - [`Word`] - Validated, non-empty borrowed words
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alphabet;
pub mod error;
pub mod word;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use word::Word;
