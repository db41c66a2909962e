//! Googlon - word classifier and vocabulary sorter
//!
//! This crate re-exports all layers of the Googlon system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: googlon_runtime     REPL, CLI, report rendering
//! Layer 1: googlon_lexicon     Classifier, numerals, ordering, analyzer
//! Layer 0: googlon_foundation  Alphabet tables, Word, Error
//! ```

pub use googlon_foundation as foundation;
pub use googlon_lexicon as lexicon;
pub use googlon_runtime as runtime;
