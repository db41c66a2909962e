//! Report and error rendering.

use googlon_foundation::{Error, ErrorKind, Result};
use googlon_lexicon::Report;

/// How reports are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The five-line human-readable summary.
    #[default]
    Text,
    /// One JSON object per report.
    Json,
}

/// Renders a report in the given format.
///
/// # Errors
///
/// Returns `Serialization` if JSON encoding fails.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string(report)
            .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string()))),
    }
}

/// Renders the five-line summary.
#[must_use]
pub fn render_text(report: &Report) -> String {
    format!(
        "1.) There are {} prepositions in the text.\n\
         2.) There are {} verbs in the text.\n\
         3.) There are {} subjunctive verbs in the text.\n\
         4.) Vocabulary list: {}\n\
         5.) There are {} distinct pretty numbers in the text.",
        report.prepositions,
        report.verbs,
        report.subjunctive_verbs,
        report.vocabulary.join(" "),
        report.pretty_numbers,
    )
}

/// Formats an error with its context, if any.
#[must_use]
pub fn format_error(error: &Error) -> String {
    match &error.context {
        Some(context) => format!("Error: {error} ({context})"),
        None => format!("Error: {error}"),
    }
}
