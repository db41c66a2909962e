//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use googlon_lexicon::{AlphabetPolicy, AnalyzerConfig, LineTerminatorPolicy, MalformedWordPolicy};

use crate::render::OutputFormat;

/// Googlon text analyzer
#[derive(Parser, Debug)]
#[command(name = "googlon", about = "Classify and sort Googlon text", version)]
pub struct Cli {
    /// Files to analyze, one text per line (interactive if none given)
    pub files: Vec<PathBuf>,

    /// Read texts from stdin, one per line, without prompting
    #[arg(long, short = 'b')]
    pub batch: bool,

    /// How letters outside the Googlon alphabet are treated
    #[arg(long, value_enum, default_value_t = AlphabetArg::Strict, env = "GOOGLON_ALPHABET")]
    pub alphabet: AlphabetArg,

    /// What to do with empty words (from doubled or edge spaces)
    #[arg(long, value_enum, default_value_t = MalformedArg::Abort, env = "GOOGLON_MALFORMED")]
    pub malformed: MalformedArg,

    /// Whether a trailing line break is removed before splitting
    #[arg(
        long,
        value_enum,
        default_value_t = LineTerminatorArg::Strip,
        env = "GOOGLON_LINE_TERMINATOR"
    )]
    pub line_terminator: LineTerminatorArg,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "GOOGLON_FORMAT")]
    pub format: OutputFormat,

    /// Enable verbose logging (honours RUST_LOG)
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all logging
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Builds the analyzer configuration from the parsed flags.
    #[must_use]
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::new()
            .with_alphabet(self.alphabet.into())
            .with_malformed(self.malformed.into())
            .with_line_terminator(self.line_terminator.into())
    }
}

/// `--alphabet` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlphabetArg {
    /// Reject foreign letters.
    Strict,
    /// Rank foreign letters as 0.
    Lenient,
}

impl From<AlphabetArg> for AlphabetPolicy {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Strict => Self::Strict,
            AlphabetArg::Lenient => Self::Lenient,
        }
    }
}

/// `--malformed` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MalformedArg {
    /// Fail the text.
    Abort,
    /// Drop the word.
    Skip,
}

impl From<MalformedArg> for MalformedWordPolicy {
    fn from(arg: MalformedArg) -> Self {
        match arg {
            MalformedArg::Abort => Self::Abort,
            MalformedArg::Skip => Self::Skip,
        }
    }
}

/// `--line-terminator` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LineTerminatorArg {
    /// Remove one trailing `\n` or `\r\n`.
    Strip,
    /// Keep it on the last word.
    Keep,
}

impl From<LineTerminatorArg> for LineTerminatorPolicy {
    fn from(arg: LineTerminatorArg) -> Self {
        match arg {
            LineTerminatorArg::Strip => Self::Strip,
            LineTerminatorArg::Keep => Self::Keep,
        }
    }
}
