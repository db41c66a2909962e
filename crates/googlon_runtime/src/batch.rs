//! Non-interactive analysis of line-oriented input.
//!
//! Each line of the input is one text. Lines are read with their terminator
//! attached so the analyzer's line-terminator policy applies exactly as it
//! would to any other caller.

use std::io::{BufRead, Write};

use googlon_foundation::{Error, ErrorContext, ErrorKind, Result};
use googlon_lexicon::Analyzer;
use tracing::{debug, info};

use crate::render::{OutputFormat, format_error, render};

/// Outcome of a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Texts analyzed successfully.
    pub analyzed: usize,
    /// Texts that failed analysis.
    pub failed: usize,
}

impl BatchSummary {
    /// Returns true if every text was analyzed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Adds another summary to this one.
    pub fn merge(&mut self, other: Self) {
        self.analyzed += other.analyzed;
        self.failed += other.failed;
    }
}

/// Runs the analyzer over every non-blank line of `input`.
///
/// Reports go to `out`; analysis failures go to `err` with the source name and
/// line number, and processing continues with the next line.
///
/// # Errors
///
/// Returns `Io` if reading `input` or writing `out`/`err` fails.
pub fn run_batch<R: BufRead, W: Write, E: Write>(
    analyzer: &Analyzer,
    format: OutputFormat,
    source: &str,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    let mut buf = String::new();
    let mut line = 0usize;

    loop {
        buf.clear();
        let read = input.read_line(&mut buf).map_err(|e| io_error(source, &e))?;
        if read == 0 {
            break;
        }
        line += 1;

        if buf.trim().is_empty() {
            continue;
        }

        match analyzer
            .analyze(&buf)
            .and_then(|report| render(&report, format))
        {
            Ok(rendered) => {
                if format == OutputFormat::Text && summary.analyzed > 0 {
                    writeln!(out).map_err(|e| io_error(source, &e))?;
                }
                writeln!(out, "{rendered}").map_err(|e| io_error(source, &e))?;
                summary.analyzed += 1;
            }
            Err(e) => {
                let mut context = ErrorContext::new().with_source(source).with_line(line);
                context.word_index = e.context.as_ref().and_then(|c| c.word_index);
                let e = e.with_context(context);
                debug!(source, line, error = %e, "analysis failed");
                writeln!(err, "{}", format_error(&e)).map_err(|e| io_error(source, &e))?;
                summary.failed += 1;
            }
        }
    }

    info!(
        source,
        analyzed = summary.analyzed,
        failed = summary.failed,
        "batch complete"
    );
    Ok(summary)
}

fn io_error(source: &str, e: &std::io::Error) -> Error {
    Error::new(ErrorKind::Io(format!("{source}: {e}")))
}
