use crate::{
    ast::{Node, Number},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenType},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a parenthesized, comma-separated argument list.
///
/// The list may be empty. A trailing comma is rejected because the empty
/// expression after it is.
///
/// # Errors
/// Fails if the list does not start with `(`, if an argument fails to parse,
/// or if an argument is followed by anything but `,` or `)`.
pub fn parse_arguments(tokens: &mut Lexer<'_>) -> ParseResult<Vec<Node>> {
    tokens.pop_of(TokenType::LeftParen)?;

    let mut arguments = Vec::new();
    if tokens.current()?.ty == TokenType::RightParen {
        tokens.consume()?;
        return Ok(arguments);
    }

    loop {
        arguments.push(parse_expression(tokens, None)?);
        let separator = tokens.pop()?;
        match separator.ty {
            TokenType::RightParen => return Ok(arguments),
            TokenType::Comma => {},
            _ => return Err(ParseError::UnexpectedToken { token: separator }),
        }
    }
}

/// Converts a numeric literal token into a number.
///
/// Text with a `.` becomes a float, anything else an integer. Digit
/// separators were already removed by the lexer.
///
/// # Errors
/// Returns `ParseError::MalformedNumber` when the text does not fit the
/// target type.
///
/// # Example
/// ```
/// use sprout::{
///     ast::Number,
///     interpreter::{
///         lexer::{Token, TokenType},
///         parser::utils::parse_number,
///     },
/// };
///
/// let number = |text: &str| parse_number(&Token::synthetic(text, TokenType::NumericLiteral));
///
/// assert_eq!(number("1000").unwrap(), Number::Int(1000));
/// assert_eq!(number("2.5").unwrap(), Number::Float(2.5));
/// assert!(number("99999999999999999999").is_err());
/// ```
pub fn parse_number(token: &Token) -> ParseResult<Number> {
    let malformed = || ParseError::MalformedNumber { token: token.clone() };
    if token.text.contains('.') {
        token.text.parse().map(Number::Float).map_err(|_| malformed())
    } else {
        token.text.parse().map(Number::Int).map_err(|_| malformed())
    }
}
