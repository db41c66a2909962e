//! Word classification predicates.
//!
//! All predicates look only at the word's length, its first and last letters,
//! and (for prepositions) whether it contains a `'u'`.

use googlon_foundation::Word;
use googlon_foundation::alphabet::is_foo_letter;

/// Exact length of a preposition.
pub const PREPOSITION_LEN: usize = 6;

/// Minimum length of a verb.
pub const MIN_VERB_LEN: usize = 6;

/// Returns true if `word` is a preposition: six letters long, ending in a foo
/// letter, and never containing `'u'`.
#[must_use]
pub fn is_preposition(word: Word<'_>) -> bool {
    word.len() == PREPOSITION_LEN && is_foo_letter(word.last()) && !word.contains(b'u')
}

/// Returns true if `word` is a verb: at least six letters, not ending in a
/// foo letter.
#[must_use]
pub fn is_verb(word: Word<'_>) -> bool {
    word.len() >= MIN_VERB_LEN && !is_foo_letter(word.last())
}

/// Returns true if `word` is a verb that does not start with a foo letter.
#[must_use]
pub fn is_subjunctive_verb(word: Word<'_>) -> bool {
    is_verb(word) && !is_foo_letter(word.first())
}

/// The classification flags for a single word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    /// Word is a preposition.
    pub preposition: bool,
    /// Word is a verb.
    pub verb: bool,
    /// Word is a subjunctive verb (implies `verb`).
    pub subjunctive: bool,
}

impl Classification {
    /// Classifies a word.
    #[must_use]
    pub fn of(word: Word<'_>) -> Self {
        let verb = is_verb(word);
        Self {
            preposition: is_preposition(word),
            verb,
            subjunctive: verb && !is_foo_letter(word.first()),
        }
    }
}
