//! Line editing for the REPL.
//!
//! The REPL talks to a [`LineEditor`], so tests can drive it with scripted
//! input. [`RustylineEditor`] is the terminal implementation: it highlights
//! input the analyzer would reject, hints from history, and tab-completes
//! words from the vocabulary of texts analyzed earlier in the session.

use std::borrow::Cow;
use std::collections::BTreeSet;

use googlon_foundation::{Error, ErrorKind, Result};
use googlon_lexicon::tokenizer::SEPARATOR;
use googlon_lexicon::{AlphabetPolicy, sort_vocabulary};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Context, Editor, Helper, Hinter, Validator};

use crate::highlight::GooglonHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was read.
    Line(String),
    /// Ctrl+C.
    Interrupted,
    /// Ctrl+D.
    Eof,
}

/// What the REPL needs from a line editor.
pub trait LineEditor {
    /// Reads a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Adds a line to history.
    fn add_history(&mut self, line: &str);

    /// Offers `words` as completions for later input.
    fn learn_words(&mut self, words: &[String]);
}

/// Completes the word under the cursor from previously analyzed vocabulary.
#[derive(Default)]
struct VocabularyCompleter {
    words: BTreeSet<String>,
}

impl VocabularyCompleter {
    /// Known words starting with `prefix`, in Googlon order.
    fn candidates(&self, prefix: &str) -> Vec<String> {
        let mut matches: Vec<String> = self
            .words
            .range(prefix.to_string()..)
            .take_while(|w| w.starts_with(prefix))
            .filter(|w| w.as_str() != prefix)
            .cloned()
            .collect();
        // The lenient policy never returns an error.
        let _ = sort_vocabulary(&mut matches, AlphabetPolicy::Lenient);
        matches
    }
}

impl Completer for VocabularyCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = line[..pos].rfind(SEPARATOR).map_or(0, |i| i + 1);
        let candidates = self
            .candidates(&line[start..pos])
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, candidates))
    }
}

#[derive(Helper, Hinter, Validator)]
struct GooglonHelper {
    completer: VocabularyCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: GooglonHighlighter,
}

impl Completer for GooglonHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Highlighter for GooglonHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;34m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, kind: CmdKind) -> bool {
        !matches!(kind, CmdKind::MoveCursor)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Terminal line editor backed by rustyline.
pub struct RustylineEditor {
    editor: Editor<GooglonHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates the editor.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if rustyline cannot be initialized.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(internal)?
            .build();

        let mut editor = Editor::with_config(config).map_err(internal)?;
        editor.set_helper(Some(GooglonHelper {
            completer: VocabularyCompleter::default(),
            hinter: HistoryHinter::new(),
            highlighter: GooglonHighlighter::new(),
        }));

        Ok(Self { editor })
    }
}

fn internal(e: ReadlineError) -> Error {
    Error::new(ErrorKind::Internal(e.to_string()))
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(internal(e)),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn learn_words(&mut self, words: &[String]) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.words.extend(words.iter().cloned());
        }
    }
}
