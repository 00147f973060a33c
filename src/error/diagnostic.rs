use std::fmt;

use crate::{error::ParseError, interpreter::lexer::Token};

/// A renderable error report.
///
/// A diagnostic starts with a description and one location block. More
/// location blocks can be stacked on top (for example the statement that
/// contained the failing expression) and free-text notes can be appended. All
/// parts are rendered in the order they were added.
///
/// # Example
/// ```
/// use sprout::{
///     error::Diagnostic,
///     interpreter::lexer::{Lexer, Source},
/// };
///
/// let source = Source::new("let x;\nlet 1;");
/// let mut lexer = Lexer::new(&source);
/// let error = sprout::interpreter::parser::module::parse_module(&mut lexer).unwrap_err();
///
/// let rendered = Diagnostic::from_parse_error(&error, Some(&source.text)).to_string();
/// assert!(rendered.contains("unknown file:2:5: error: \"1\""));
/// assert!(rendered.contains("    ^~~~ Here"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostic {
    description: String,
    stack:       Vec<String>,
    notes:       Vec<String>,
}

impl Diagnostic {
    /// Creates a diagnostic pointing at `token`.
    ///
    /// When `source` is given, up to three lines ending at the token's line
    /// are quoted below the location header, followed by a caret under the
    /// token's column.
    #[must_use]
    pub fn new(token: &Token, description: impl Into<String>, source: Option<&str>) -> Self {
        let mut diagnostic = Self { description: description.into(),
                                    stack:       Vec::new(),
                                    notes:       Vec::new(), };
        diagnostic.push_location(token, source);
        diagnostic
    }

    /// Builds the diagnostic for a lexing or parsing failure.
    #[must_use]
    pub fn from_parse_error(error: &ParseError, source: Option<&str>) -> Self {
        Self::new(error.token(), error.description(), source)
    }

    /// Adds another location block below the existing ones.
    pub fn push_location(&mut self, token: &Token, source: Option<&str>) {
        let mut block = header(token);
        if let Some(source) = source {
            block.push('\n');
            block.push_str(&context(source, token.location.line, token.location.column));
        }
        self.stack.push(block);
    }

    /// Appends a free-text note.
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        for block in &self.stack {
            writeln!(f, "{}", block.trim_end())?;
        }
        for note in &self.notes {
            writeln!(f, "{note}")?;
        }
        Ok(())
    }
}

/// Formats `<file>:<line>:<column>: error: "<text>"` for a token.
#[must_use]
pub fn header(token: &Token) -> String {
    format!("{}: error: \"{}\"", token.location, token.text)
}

/// Quotes the source around a location.
///
/// Returns the (at most three) lines ending at `line`, then a line with a
/// caret under `column`. Lines and columns are 1-based. Returns an empty string
/// when the location lies outside the source.
#[must_use]
pub fn context(source: &str, line: usize, column: usize) -> String {
    let first = line.saturating_sub(2).max(1);
    let count = (line + 1).saturating_sub(first);

    let mut quoted = String::new();
    for text in source.lines().skip(first - 1).take(count) {
        quoted.push_str(text);
        quoted.push('\n');
    }

    if !quoted.is_empty() {
        quoted.push_str(&" ".repeat(column.saturating_sub(1)));
        quoted.push_str("^~~~ Here\n");
    }

    quoted
}
