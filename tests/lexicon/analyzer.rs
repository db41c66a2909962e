//! Analyzer tests.

use googlon_foundation::ErrorKind;
use googlon_lexicon::{Analyzer, AnalyzerConfig, MalformedWordPolicy, Report};

#[test]
fn full_report() {
    let report = Analyzer::default()
        .analyze("iygsex rsogxd fgixsr ggixsr gxjrc dcnql meofh hej gxjrc")
        .unwrap();

    assert_eq!(
        report,
        Report {
            prepositions: 2,
            verbs: 2,
            subjunctive_verbs: 1,
            vocabulary: vec![
                "meofh".into(),
                "fgixsr".into(),
                "hej".into(),
                "rsogxd".into(),
                "dcnql".into(),
                "gxjrc".into(),
                "ggixsr".into(),
                "iygsex".into(),
            ],
            pretty_numbers: 4,
        }
    );
}

#[test]
fn vocabulary_has_each_word_once() {
    let report = Analyzer::default().analyze("hej hej sx hej sx").unwrap();
    assert_eq!(report.vocabulary, ["sx", "hej"]);
    assert_eq!(report.distinct_words(), 2);
}

#[test]
fn abort_is_all_or_nothing() {
    let err = Analyzer::default().analyze("gxjrc dcnql ").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidWord { .. }));
}

#[test]
fn skip_keeps_the_rest() {
    let analyzer =
        Analyzer::new(AnalyzerConfig::default().with_malformed(MalformedWordPolicy::Skip));
    let report = analyzer.analyze("gxjrc dcnql ").unwrap();
    assert_eq!(report.pretty_numbers, 2);
}

#[test]
fn analyzer_is_reusable() {
    let analyzer = Analyzer::default();
    let first = analyzer.analyze("gxjrc").unwrap();
    let second = analyzer.analyze("hej").unwrap();
    assert_eq!(first.vocabulary, ["gxjrc"]);
    assert_eq!(second.vocabulary, ["hej"]);
}
