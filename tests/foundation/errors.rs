//! Error type tests.

use googlon_foundation::{Error, ErrorContext, ErrorKind};

#[test]
fn error_display_uses_kind() {
    let err = Error::numeral_overflow("iiiiiiiiiiiiiii");
    assert_eq!(
        err.to_string(),
        "numeral overflow: \"iiiiiiiiiiiiiii\" does not fit in a 64-bit integer"
    );
}

#[test]
fn context_is_optional() {
    let err = Error::invalid_word("empty word");
    assert!(err.context.is_none());

    let err = err.with_context(ErrorContext::new().with_word_index(0));
    assert_eq!(err.context.unwrap().to_string(), "word #0");
}

#[test]
fn io_errors_are_not_word_errors() {
    let err = Error::new(ErrorKind::Io("no such file".into()));
    assert!(!err.is_word_error());
    assert_eq!(err.to_string(), "I/O error: no such file");
}

#[test]
fn out_of_alphabet_fields() {
    let err = Error::out_of_alphabet("sxKo", b'K', 2);
    match err.kind {
        ErrorKind::OutOfAlphabet {
            word,
            byte,
            position,
        } => {
            assert_eq!(word, "sxKo");
            assert_eq!(byte, b'K');
            assert_eq!(position, 2);
        }
        other => panic!("unexpected kind: {other}"),
    }
}
