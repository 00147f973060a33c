use std::{collections::VecDeque, path::Path, rc::Rc};

use log::{trace, warn};
use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// The grammar table: token categories, spellings and binding powers.
pub mod token;
/// Source text and its origin.
pub mod source;

pub use source::Source;
pub use token::{LexerExtras, Location, Token, TokenType};

/// A lazily filled, lookahead-buffered token stream.
///
/// Tokens are produced on demand into a small buffer so that the parser can
/// peek at the current and the following token without consuming them. Once
/// the input is exhausted the stream yields end-of-input tokens, so two-token
/// lookahead never runs dry.
///
/// Characters that start no token at all (for example `$` or a stray `'`) are
/// dropped with a warning.
///
/// # Example
/// ```
/// use sprout::interpreter::lexer::{Lexer, Source, TokenType};
///
/// let source = Source::new("x <= 10;");
/// let mut lexer = Lexer::new(&source);
///
/// assert_eq!(lexer.pop().unwrap().text, "x");
/// assert_eq!(lexer.current().unwrap().ty, TokenType::LessEqual);
/// assert_eq!(lexer.next().unwrap().text, "10");
/// ```
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, TokenType>,
    path:     Option<Rc<Path>>,
    buffer:   VecDeque<Token>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'src Source) -> Self {
        Self { inner:    TokenType::lexer_with_extras(&source.text, LexerExtras::new()),
               path:     source.path.clone(),
               buffer:   VecDeque::new(),
               finished: false, }
    }

    /// Peeks at the front token.
    pub fn current(&mut self) -> ParseResult<&Token> {
        self.fill(1)?;
        Ok(&self.buffer[0])
    }

    /// Peeks at the token after the front token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> ParseResult<&Token> {
        self.fill(2)?;
        Ok(&self.buffer[1])
    }

    /// Peeks at the front token, failing unless it has type `expected`.
    pub fn current_of(&mut self, expected: TokenType) -> ParseResult<&Token> {
        let token = self.current()?;
        expect_type(token, expected)?;
        Ok(token)
    }

    /// Peeks at the token after the front token, failing unless it has type
    /// `expected`.
    pub fn next_of(&mut self, expected: TokenType) -> ParseResult<&Token> {
        let token = self.next()?;
        expect_type(token, expected)?;
        Ok(token)
    }

    /// Removes and returns the front token.
    pub fn pop(&mut self) -> ParseResult<Token> {
        self.fill(1)?;
        Ok(self.buffer
               .pop_front()
               .unwrap_or_else(|| self.end_token()))
    }

    /// Removes and returns the front token, failing unless it has type
    /// `expected`. The token is consumed either way.
    pub fn pop_of(&mut self, expected: TokenType) -> ParseResult<Token> {
        let token = self.pop()?;
        expect_type(&token, expected)?;
        Ok(token)
    }

    /// Discards the front token.
    pub fn consume(&mut self) -> ParseResult<()> {
        self.pop().map(drop)
    }

    fn fill(&mut self, count: usize) -> ParseResult<()> {
        while self.buffer.len() < count {
            self.read_one()?;
        }
        Ok(())
    }

    fn read_one(&mut self) -> ParseResult<()> {
        match self.inner.next() {
            Some(Ok(ty)) => {
                let text = match ty {
                    TokenType::NumericLiteral => self.inner.slice().replace('\'', ""),
                    _ => self.inner.slice().to_string(),
                };
                let token = Token { text,
                                    ty,
                                    location: self.location(self.inner.span().start) };
                trace!("token {} {:?} at {}", token.ty, token.text, token.location);
                self.buffer.push_back(token);
            },
            Some(Err(())) => {
                let token = Token { text:     self.inner.slice().to_string(),
                                    ty:       TokenType::Unknown,
                                    location: self.location(self.inner.span().start), };
                if token.text.starts_with('"') {
                    return Err(ParseError::UnterminatedString { token });
                }
                warn!("{}: dropping unrecognized input {:?}", token.location, token.text);
            },
            None => {
                let token = self.end_token();
                if !self.finished {
                    self.finished = true;
                    self.buffer.push_back(token.clone());
                }
                self.buffer.push_back(token);
            },
        }
        Ok(())
    }

    fn end_token(&self) -> Token {
        Token { text:     String::new(),
                ty:       TokenType::Eof,
                location: self.location(self.inner.source().len()), }
    }

    fn location(&self, offset: usize) -> Location {
        let extras = self.inner.extras;
        let source = self.inner.source();
        // A string literal spanning lines has already advanced the line count.
        let (line, line_start) = if offset >= extras.line_start {
            (extras.line, extras.line_start)
        } else {
            let skipped = source.get(offset..extras.line_start)
                                .map_or(0, |text| text.matches('\n').count());
            let start = source.get(..offset)
                              .and_then(|text| text.rfind('\n'))
                              .map_or(0, |index| index + 1);
            (extras.line.saturating_sub(skipped), start)
        };
        let column = source.get(line_start..offset)
                           .map_or(0, |text| text.chars().count())
                     + 1;
        Location { line,
                   column,
                   path: self.path.clone() }
    }
}

/// Fails with a type mismatch unless `token` has type `expected`.
pub fn expect_type(token: &Token, expected: TokenType) -> ParseResult<()> {
    if token.ty == expected {
        Ok(())
    } else {
        Err(ParseError::TypeMismatch { expected,
                                       found: token.clone() })
    }
}

/// Fails unless `token` is spelled exactly `expected`.
pub fn expect_text(token: &Token, expected: &'static str) -> ParseResult<()> {
    if token.text == expected {
        Ok(())
    } else {
        Err(ParseError::UnexpectedText { expected,
                                         found: token.clone() })
    }
}

/// Lexes a whole source, returning every token before the end of input.
///
/// # Errors
/// Fails on an unterminated string literal.
///
/// # Example
/// ```
/// use sprout::interpreter::lexer::{Source, tokenize};
///
/// let tokens = tokenize(&Source::new("1 + // note\n2")).unwrap();
/// let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
///
/// assert_eq!(texts, ["1", "+", "2"]);
/// ```
pub fn tokenize(source: &Source) -> ParseResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.pop()?;
        if token.is_eof() {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}
