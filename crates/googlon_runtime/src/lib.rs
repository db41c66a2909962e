//! REPL, CLI, and report rendering for Googlon.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-analyze-print loop
//! - [`run_batch`] - Line-oriented analysis of files and stdin
//! - [`Cli`] - Command-line arguments and analyzer configuration
//! - Report rendering as text or JSON

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod cli;
pub mod editor;
pub mod highlight;
pub mod logging;
pub mod render;
pub mod repl;

pub use batch::{BatchSummary, run_batch};
pub use cli::Cli;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use render::{OutputFormat, render, render_text};
pub use repl::Repl;
