use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, TokenType},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses `{ statement; statement; ... }`.
///
/// Statements are separated by `;`, which is optional before the closing
/// brace. An empty block is allowed.
///
/// # Errors
/// Fails if the block does not start with `{`, is never closed, or contains
/// two statements without a `;` between them.
pub fn parse_block(tokens: &mut Lexer<'_>) -> ParseResult<Block> {
    tokens.pop_of(TokenType::LeftBrace)?;

    let mut statements = Vec::new();
    while tokens.current()?.ty != TokenType::RightBrace {
        statements.push(parse_expression(tokens, None)?);

        match tokens.current()?.ty {
            TokenType::Semicolon => tokens.consume()?,
            TokenType::RightBrace => {},
            _ => return Err(ParseError::MissingTerminator { token: tokens.current()?.clone() }),
        }
    }
    tokens.consume()?;

    Ok(statements.into())
}
