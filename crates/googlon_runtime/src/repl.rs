//! The interactive REPL.
//!
//! Each line entered is one text. The report goes to stdout; analysis errors
//! go to stderr and the loop keeps going. Words from every successful
//! analysis become tab completions for later lines.

use std::io::{self, Write};

use googlon_foundation::{Error, ErrorContext, Result};
use googlon_lexicon::{Analyzer, Report};
use tracing::debug;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render::{OutputFormat, format_error, render};

/// Default input prompt.
pub const PROMPT: &str = "Enter text: ";

/// Outcome of one read-eval iteration.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// A rendered report to print.
    Report(String),
    /// Blank line, interrupt, or failed analysis.
    Nothing,
    /// End of input.
    Done,
}

/// Read a text, analyze it, print the report.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    analyzer: Analyzer,
    format: OutputFormat,
    show_banner: bool,
    prompt: String,
    /// Lines read so far, for error context.
    line: usize,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        Ok(Self::with_editor(RustylineEditor::new()?))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL reading from `editor`.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            analyzer: Analyzer::default(),
            format: OutputFormat::default(),
            show_banner: true,
            prompt: PROMPT.to_string(),
            line: 0,
        }
    }

    /// Sets the analyzer.
    #[must_use]
    pub const fn with_analyzer(mut self, analyzer: Analyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Runs until EOF.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            match self.step()? {
                Step::Report(output) => println!("{output}\n"),
                Step::Nothing => {}
                Step::Done => break,
            }
        }

        println!();
        Ok(())
    }

    fn step(&mut self) -> Result<Step> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(Step::Nothing),
            ReadResult::Eof => return Ok(Step::Done),
        };
        self.line += 1;

        if input.trim().is_empty() {
            return Ok(Step::Nothing);
        }
        self.editor.add_history(&input);

        let rendered = self.analyze(&input).and_then(|report| {
            self.editor.learn_words(&report.vocabulary);
            render(&report, self.format)
        });

        match rendered {
            Ok(output) => Ok(Step::Report(output)),
            Err(e) => {
                let e = self.locate(e);
                eprintln!("\x1b[31m{}\x1b[0m", format_error(&e));
                Ok(Step::Nothing)
            }
        }
    }

    /// Analyzes one text and renders the report.
    ///
    /// # Errors
    ///
    /// Returns an error if analysis or rendering fails.
    pub fn eval(&self, input: &str) -> Result<String> {
        render(&self.analyze(input)?, self.format)
    }

    /// The line editor drops the line break, so it is put back and the
    /// analyzer's line-terminator policy decides what happens to it.
    fn analyze(&self, input: &str) -> Result<Report> {
        debug!(line = self.line, bytes = input.len(), "analyzing input");
        let mut text = String::with_capacity(input.len() + 1);
        text.push_str(input);
        text.push('\n');
        self.analyzer.analyze(&text)
    }

    /// Adds the REPL line to whatever context the analyzer attached.
    fn locate(&self, e: Error) -> Error {
        let context = e
            .context
            .clone()
            .unwrap_or_else(ErrorContext::new)
            .with_source("<repl>")
            .with_line(self.line);
        e.with_context(context)
    }
}

fn print_banner() {
    println!("\x1b[1;36mGooglon v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
    println!("One text per line. Tab completes known words. Ctrl+D exits.\n");
    let _ = io::stdout().flush();
}
