//! Input highlighting for the REPL.

use std::borrow::Cow;

use googlon_foundation::alphabet::is_letter;

/// Highlights characters the strict analyzer would reject.
pub struct GooglonHighlighter {}

impl GooglonHighlighter {
    /// Creates a new highlighter.
    pub const fn new() -> Self {
        Self {}
    }

    /// Highlight a line of input.
    ///
    /// Foreign letters are shown in red; runs of more than one space (which
    /// produce empty words) get a red background.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.bytes().all(|b| is_letter(b) || b == b' ') && !line.contains("  ") {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.chars().peekable();
        let mut previous_space = false;

        while let Some(c) = chars.next() {
            match c {
                ' ' => {
                    let doubled = previous_space || chars.peek() == Some(&' ');
                    if doubled {
                        result.push_str("\x1b[41m \x1b[0m");
                    } else {
                        result.push(' ');
                    }
                    previous_space = true;
                    continue;
                }
                c if u8::try_from(c).is_ok_and(is_letter) => result.push(c),
                c => {
                    result.push_str("\x1b[31m"); // red
                    result.push(c);
                    result.push_str("\x1b[0m");
                }
            }
            previous_space = false;
        }

        Cow::Owned(result)
    }
}

impl Default for GooglonHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
