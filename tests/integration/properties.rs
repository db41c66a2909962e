//! Property tests over whole texts.

use std::collections::HashSet;

use googlon::lexicon::ordering::is_sorted;
use googlon::lexicon::{Analyzer, AnalyzerConfig};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[sxocqnmwpfyheljrdgui]{1,12}", 1..40)
}

proptest! {
    #[test]
    fn vocabulary_is_distinct_and_sorted(words in text()) {
        let report = Analyzer::default().analyze(&words.join(" ")).unwrap();

        let distinct: HashSet<&String> = words.iter().collect();
        prop_assert_eq!(report.vocabulary.len(), distinct.len());
        for word in &report.vocabulary {
            prop_assert!(distinct.contains(word));
        }
        prop_assert!(is_sorted(&report.vocabulary));
    }

    #[test]
    fn counts_are_bounded(words in text()) {
        let report = Analyzer::default().analyze(&words.join(" ")).unwrap();
        let total = words.len() as u64;

        prop_assert!(report.prepositions + report.verbs <= total);
        prop_assert!(report.subjunctive_verbs <= report.verbs);
        prop_assert!(report.pretty_numbers <= report.vocabulary.len() as u64);
    }

    #[test]
    fn counts_ignore_word_order(mut words in text()) {
        let forward = Analyzer::default().analyze(&words.join(" ")).unwrap();
        words.reverse();
        let backward = Analyzer::default().analyze(&words.join(" ")).unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn compat_texts_with_foreign_letters_analyze(
        words in proptest::collection::vec("[sxiab]{1,4}", 1..40),
    ) {
        let report = Analyzer::new(AnalyzerConfig::compat())
            .analyze(&words.join(" "))
            .unwrap();
        prop_assert!(is_sorted(&report.vocabulary));
    }
}
