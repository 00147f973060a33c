use log::debug;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, TokenType},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses one statement and its terminator.
///
/// A statement is a single expression followed by `;`. The `;` may be left
/// out only when the input ends right after the statement.
///
/// # Errors
/// Fails if the expression fails to parse, including an empty statement, or
/// with `ParseError::MissingTerminator` if something other than `;` or the end
/// of input follows it.
///
/// # Example
/// ```
/// use sprout::interpreter::{
///     lexer::{Lexer, Source},
///     parser::statement::parse_statement,
/// };
///
/// let source = Source::new("let x; x = [] std.println(x);");
/// let mut lexer = Lexer::new(&source);
///
/// assert!(parse_statement(&mut lexer).is_ok());
/// assert!(parse_statement(&mut lexer).is_err());
/// ```
pub fn parse_statement(tokens: &mut Lexer<'_>) -> ParseResult<Node> {
    let node = parse_expression(tokens, None)?;

    match tokens.current()?.ty {
        TokenType::Semicolon => tokens.consume()?,
        TokenType::Eof => {},
        _ => return Err(ParseError::MissingTerminator { token: tokens.current()?.clone() }),
    }

    debug!("{}: parsed statement", node.token().location);
    Ok(node)
}
