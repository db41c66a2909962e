//! Input-to-output tests.

use std::io::Cursor;

use googlon::lexicon::{Analyzer, AnalyzerConfig};
use googlon::runtime::{BatchSummary, OutputFormat, render_text, run_batch};

fn batch(analyzer: &Analyzer, input: &str) -> (BatchSummary, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = run_batch(
        analyzer,
        OutputFormat::Text,
        "<test>",
        Cursor::new(input),
        &mut out,
        &mut err,
    )
    .unwrap();
    (
        summary,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn interactive_line_renders_five_lines() {
    let report = Analyzer::default()
        .analyze("iygsex fgixsr ggixsr gxjrc hej\n")
        .unwrap();
    assert_eq!(
        render_text(&report),
        "1.) There are 1 prepositions in the text.\n\
         2.) There are 2 verbs in the text.\n\
         3.) There are 1 subjunctive verbs in the text.\n\
         4.) Vocabulary list: fgixsr hej gxjrc ggixsr iygsex\n\
         5.) There are 2 distinct pretty numbers in the text."
    );
}

#[test]
fn batch_reports_are_separated_by_blank_lines() {
    let (summary, out, err) = batch(&Analyzer::default(), "gxjrc\nhej\n");
    assert!(summary.is_success());
    assert!(err.is_empty());
    let blocks: Vec<&str> = out.trim_end().split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].contains("Vocabulary list: gxjrc"));
    assert!(blocks[1].contains("Vocabulary list: hej"));
}

#[test]
fn compat_mode_keeps_newline_on_last_word() {
    // "iygsex\n" is seven bytes, so it is no longer a preposition.
    let strict = Analyzer::default().analyze("iygsex\n").unwrap();
    let compat = Analyzer::new(AnalyzerConfig::compat())
        .analyze("iygsex\n")
        .unwrap();
    assert_eq!(strict.prepositions, 1);
    assert_eq!(compat.prepositions, 0);
    assert_eq!(compat.verbs, 1);
}

#[test]
fn one_bad_line_does_not_fail_the_rest() {
    let (summary, out, err) = batch(&Analyzer::default(), "gxjrc\nthe cat\nhej\n");
    assert_eq!(
        summary,
        BatchSummary {
            analyzed: 2,
            failed: 1
        }
    );
    assert_eq!(out.matches("5.)").count(), 2);
    assert!(err.contains("<test>:2"));
    assert!(err.contains("not in the Googlon alphabet"));
}
