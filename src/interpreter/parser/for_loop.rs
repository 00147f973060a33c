use crate::{
    ast::ForLoop,
    interpreter::{
        lexer::{Lexer, Token, TokenType, expect_text},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a `for` loop header: `for (declaration in range)`.
///
/// The declaration is parsed up to the word `in`; the range up to the closing
/// parenthesis. The returned loop has an empty body, which the caller fills
/// in when one follows.
///
/// # Errors
/// Fails if the keyword, the parentheses or the `in` are missing, or if either
/// expression fails to parse.
pub fn parse_for(tokens: &mut Lexer<'_>) -> ParseResult<ForLoop> {
    let token = tokens.pop_of(TokenType::For)?;
    tokens.pop_of(TokenType::LeftParen)?;

    let is_in = |token: &Token| token.text == "in";
    let declaration = parse_expression(tokens, Some(&is_in))?;
    expect_text(&tokens.pop_of(TokenType::Identifier)?, "in")?;

    let range = parse_expression(tokens, None)?;
    tokens.pop_of(TokenType::RightParen)?;

    Ok(ForLoop { token,
                 declaration: Box::new(declaration),
                 range: Box::new(range),
                 body: Vec::new().into() })
}
