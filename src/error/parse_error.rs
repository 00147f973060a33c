use crate::interpreter::lexer::{Token, TokenType};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token that cannot appear at this position.
    UnexpectedToken {
        /// The token encountered.
        token: Token,
    },
    /// A token of a specific type was required.
    TypeMismatch {
        /// The type the grammar asked for.
        expected: TokenType,
        /// The token encountered instead.
        found:    Token,
    },
    /// A token with a specific spelling was required, such as `in`.
    UnexpectedText {
        /// The required spelling.
        expected: &'static str,
        /// The token encountered instead.
        found:    Token,
    },
    /// `let` appeared after the start of a statement.
    MisplacedDeclaration {
        /// The token following the `let` keyword.
        token: Token,
    },
    /// A statement started with `=`.
    MissingAssignmentTarget {
        /// The `=` token.
        token: Token,
    },
    /// A `.` appeared with nothing to its left.
    StrayPeriod {
        /// The `.` token.
        token: Token,
    },
    /// A `(` appeared with nothing to call.
    StrayParen {
        /// The `(` token.
        token: Token,
    },
    /// A string literal was still open at the end of input.
    UnterminatedString {
        /// The literal up to the end of input.
        token: Token,
    },
    /// A numeric literal could not be represented.
    MalformedNumber {
        /// The literal token.
        token: Token,
    },
    /// Two statements were not separated by `;`.
    MissingTerminator {
        /// The first token of the second statement.
        token: Token,
    },
}

impl ParseError {
    /// Returns the token the error points at.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::UnexpectedToken { token }
            | Self::MisplacedDeclaration { token }
            | Self::MissingAssignmentTarget { token }
            | Self::StrayPeriod { token }
            | Self::StrayParen { token }
            | Self::UnterminatedString { token }
            | Self::MalformedNumber { token }
            | Self::MissingTerminator { token } => token,
            Self::TypeMismatch { found, .. } | Self::UnexpectedText { found, .. } => found,
        }
    }

    /// A one-line description of the error without location information.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::UnexpectedToken { .. } => "Unexpected token".to_string(),
            Self::TypeMismatch { expected, found } => {
                format!("expected type {expected} but got {} (\"{}\")", found.ty, found.text)
            },
            Self::UnexpectedText { expected, found } => {
                format!("expected {expected} but got {}", found.text)
            },
            Self::MisplacedDeclaration { .. } => "Let must be at beginning of line".to_string(),
            Self::MissingAssignmentTarget { .. } => "Line cannot start with '='".to_string(),
            Self::StrayPeriod { .. } => "stray '.'".to_string(),
            Self::StrayParen { .. } => "Unexpected paren".to_string(),
            Self::UnterminatedString { .. } => "Unterminated string literal".to_string(),
            Self::MalformedNumber { .. } => "Numeric literal is out of range".to_string(),
            Self::MissingTerminator { .. } => "Expected ';' between statements".to_string(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = self.token();
        write!(f,
               "{}: error: \"{}\": {}",
               token.location,
               token.text,
               self.description())
    }
}

impl std::error::Error for ParseError {}
