//! Comparator and sorting tests.

use std::cmp::Ordering;

use googlon_lexicon::{AlphabetPolicy, compare, sort_vocabulary};

fn sorted(words: &[&str]) -> Vec<String> {
    let mut words: Vec<String> = words.iter().map(ToString::to_string).collect();
    sort_vocabulary(&mut words, AlphabetPolicy::Strict).unwrap();
    words
}

#[test]
fn sort_examples() {
    assert_eq!(
        sorted(&["ghepqyd", "pdoymnwxei", "emjocsild", "shoce"]),
        ["shoce", "pdoymnwxei", "emjocsild", "ghepqyd"]
    );
    assert_eq!(
        sorted(&["pdoymnwxei", "phfer", "pq", "podciy"]),
        ["podciy", "pq", "phfer", "pdoymnwxei"]
    );
    assert_eq!(sorted(&["pppp", "ppp", "pp", "p"]), ["p", "pp", "ppp", "pppp"]);
}

#[test]
fn resorting_is_a_no_op() {
    let once = sorted(&["ghepqyd", "pdoymnwxei", "emjocsild", "shoce", "p", "pq"]);
    let refs: Vec<&str> = once.iter().map(String::as_str).collect();
    assert_eq!(sorted(&refs), once);
}

#[test]
fn not_byte_order() {
    // Byte order puts 'c' before 's'; Googlon order puts 's' first.
    assert_eq!(
        compare("shoce", "cat", AlphabetPolicy::Lenient).unwrap(),
        Ordering::Less
    );
    assert!(compare("shoce", "cat", AlphabetPolicy::Strict).is_err());
}

#[test]
fn empty_slice_sorts() {
    let mut words: Vec<String> = Vec::new();
    sort_vocabulary(&mut words, AlphabetPolicy::Strict).unwrap();
    assert!(words.is_empty());
}
