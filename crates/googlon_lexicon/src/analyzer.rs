//! The analysis pipeline.
//!
//! ```text
//! text → tokenizer → words → classify (counts)
//!                          → dedupe (first-seen) → sort → pretty count → Report
//! ```

use std::collections::HashSet;

use googlon_foundation::{ErrorContext, Result, Word};
use tracing::{debug, trace, warn};

use crate::classify::Classification;
use crate::config::{AnalyzerConfig, MalformedWordPolicy};
use crate::numeral::is_pretty_number;
use crate::ordering::sort_vocabulary;
use crate::report::Report;
use crate::tokenizer::Tokenizer;

/// Analyzes Googlon text.
///
/// Holds only its configuration, so one analyzer can be reused (or shared
/// across threads) for any number of texts.
#[derive(Clone, Copy, Debug, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates an analyzer with the given configuration.
    #[must_use]
    pub const fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Returns the analyzer's configuration.
    #[must_use]
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes one text.
    ///
    /// # Errors
    ///
    /// - `InvalidWord` for an empty word (from leading, trailing, or doubled
    ///   spaces) unless the malformed-word policy is `Skip`.
    /// - `OutOfAlphabet` for a foreign letter under the strict alphabet
    ///   policy.
    ///
    /// Either error aborts the whole analysis.
    pub fn analyze(&self, text: &str) -> Result<Report> {
        let tokenizer = Tokenizer::new(self.config.line_terminator);

        let mut report = Report::default();
        let mut seen: HashSet<Word<'_>> = HashSet::new();
        let mut vocabulary: Vec<Word<'_>> = Vec::new();
        let mut word_count = 0usize;

        for (index, raw) in tokenizer.tokenize(text).enumerate() {
            let word = match Word::new(raw) {
                Ok(word) => word,
                Err(err) => match self.config.malformed {
                    MalformedWordPolicy::Abort => {
                        return Err(err.with_context(ErrorContext::new().with_word_index(index)));
                    }
                    MalformedWordPolicy::Skip => {
                        warn!(index, error = %err, "skipping malformed word");
                        continue;
                    }
                },
            };
            self.config
                .alphabet
                .check(word.as_str())
                .map_err(|e| e.with_context(ErrorContext::new().with_word_index(index)))?;
            word_count += 1;

            let class = Classification::of(word);
            trace!(%word, ?class, "classified word");

            if class.preposition {
                report.prepositions += 1;
            }
            if class.verb {
                report.verbs += 1;
                if class.subjunctive {
                    report.subjunctive_verbs += 1;
                }
            }

            if seen.insert(word) {
                vocabulary.push(word);
            }
        }

        sort_vocabulary(&mut vocabulary, self.config.alphabet)?;

        for &word in &vocabulary {
            if is_pretty_number(word, self.config.alphabet)? {
                report.pretty_numbers += 1;
            }
        }

        report.vocabulary = vocabulary.iter().map(|w| w.as_str().to_owned()).collect();

        debug!(
            words = word_count,
            distinct = report.vocabulary.len(),
            prepositions = report.prepositions,
            verbs = report.verbs,
            subjunctive_verbs = report.subjunctive_verbs,
            pretty_numbers = report.pretty_numbers,
            "analyzed text"
        );

        Ok(report)
    }
}
