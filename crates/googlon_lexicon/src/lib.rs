//! Word classification, numeral decoding, and vocabulary ordering for Googlon.
//!
//! # Architecture
//!
//! ```text
//! "iygsex fgixsr gxjrc"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["iygsex", "fgixsr", "gxjrc"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   CLASSIFIER    │  → preposition, verb, (not a verb)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   ORDERING      │  → ["fgixsr", "gxjrc", "iygsex"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   NUMERAL       │  → gxjrc = 605637, pretty
//! └─────────────────┘
//!          │
//!          ▼
//!       Report
//! ```
//!
//! # Modules
//!
//! - [`classify`] - Preposition, verb, and subjunctive verb predicates
//! - [`numeral`] - Base-20 word-to-number decoding and pretty numbers
//! - [`ordering`] - Googlon lexicographic comparison and sorting
//! - [`tokenizer`] - Splitting text into words
//! - [`analyzer`] - The full pipeline producing a [`Report`]
//! - [`config`] - Policies for input outside the Googlon rules

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analyzer;
pub mod classify;
pub mod config;
pub mod numeral;
pub mod ordering;
pub mod report;
pub mod tokenizer;

pub use analyzer::Analyzer;
pub use classify::{Classification, is_preposition, is_subjunctive_verb, is_verb};
pub use config::{AlphabetPolicy, AnalyzerConfig, LineTerminatorPolicy, MalformedWordPolicy};
pub use numeral::{is_pretty_number, word_to_number};
pub use ordering::{compare, sort_vocabulary};
pub use report::Report;
pub use tokenizer::Tokenizer;
