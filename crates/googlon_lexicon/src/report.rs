//! Analysis results.

/// Everything the analyzer learned about one text.
///
/// Built once by [`Analyzer::analyze`](crate::Analyzer::analyze) and never
/// modified afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// Number of prepositions, counting repeats.
    pub prepositions: u64,
    /// Number of verbs, counting repeats.
    pub verbs: u64,
    /// Number of subjunctive verbs, counting repeats.
    pub subjunctive_verbs: u64,
    /// Distinct words in Googlon order.
    pub vocabulary: Vec<String>,
    /// Number of distinct words that are pretty numbers.
    pub pretty_numbers: u64,
}

impl Report {
    /// Number of distinct words.
    #[must_use]
    pub fn distinct_words(&self) -> usize {
        self.vocabulary.len()
    }
}
