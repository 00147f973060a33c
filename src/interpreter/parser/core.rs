use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenType},
        parser::{
            block::parse_block,
            for_loop::parse_for,
            utils::{parse_arguments, parse_number},
        },
    },
};

/// Result type used by the lexer and the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// An extra condition that ends an expression before the current token.
pub type StopCondition<'a> = Option<&'a dyn Fn(&Token) -> bool>;

/// Parses one expression.
///
/// The expression is built in a single slot, token by token:
///
/// - `let name` declares; it must be the first thing in the expression.
/// - `=` wraps the slot as the left side and parses the rest as the right side,
///   so `a = b = c` nests to the right.
/// - identifiers, `this` and literals fill an empty slot; a second leaf is an
///   error.
/// - `(` after a filled slot calls it; `.name(...)` calls a member of it.
/// - `for (...)` parses a loop header and an optional braced body.
///
/// Parsing ends before `;`, before the end of input, before a token matching
/// `stop`, or before any other token the slot cannot absorb (such as `)` or
/// `,`). The caller decides whether that token is acceptable.
///
/// # Errors
/// Fails with a `ParseError` pointing at the offending token, including when
/// the expression turns out empty.
///
/// # Example
/// ```
/// use sprout::{
///     ast::Node,
///     interpreter::{
///         lexer::{Lexer, Source},
///         parser::core::parse_expression,
///     },
/// };
///
/// let source = Source::new("a = b = c;");
/// let node = parse_expression(&mut Lexer::new(&source), None).unwrap();
///
/// let Node::Assignment { right, .. } = node else { panic!("not an assignment") };
/// assert!(matches!(*right, Node::Assignment { .. }));
/// ```
pub fn parse_expression(tokens: &mut Lexer<'_>, stop: StopCondition<'_>) -> ParseResult<Node> {
    let mut slot: Option<Node> = None;

    loop {
        let token = tokens.current()?;
        let ty = token.ty;
        if matches!(ty, TokenType::Semicolon | TokenType::Eof) || stop.is_some_and(|stop| stop(token)) {
            break;
        }

        match ty {
            TokenType::Let => {
                tokens.consume()?;
                if slot.is_some() {
                    return Err(ParseError::MisplacedDeclaration { token: tokens.current()?.clone() });
                }
                let name = tokens.pop_of(TokenType::Identifier)?;
                slot = Some(Node::Declaration { name });
            },
            TokenType::Equal => {
                let equal = tokens.pop()?;
                let Some(left) = slot.take() else {
                    return Err(ParseError::MissingAssignmentTarget { token: equal });
                };
                let right = parse_expression(tokens, stop)?;
                slot = Some(Node::Assignment { left:  Box::new(left),
                                               right: Box::new(right), });
            },
            TokenType::Identifier | TokenType::This => {
                let name = tokens.pop()?;
                place(&mut slot, Node::Variable { name })?;
            },
            TokenType::StringLiteral => {
                let token = tokens.pop()?;
                place(&mut slot, Node::StringLiteral { token })?;
            },
            TokenType::NumericLiteral => {
                let token = tokens.pop()?;
                let value = parse_number(&token)?;
                place(&mut slot, Node::NumericLiteral { value, token })?;
            },
            TokenType::True | TokenType::False => {
                let token = tokens.pop()?;
                let value = token.ty == TokenType::True;
                place(&mut slot, Node::BoolLiteral { value, token })?;
            },
            TokenType::LeftBracket => {
                let token = tokens.pop()?;
                tokens.pop_of(TokenType::RightBracket)?;
                place(&mut slot, Node::ArrayLiteral { token })?;
            },
            TokenType::For => {
                if slot.is_some() {
                    return Err(ParseError::UnexpectedToken { token: tokens.current()?.clone() });
                }
                let mut for_loop = parse_for(tokens)?;
                if tokens.current()?.ty == TokenType::LeftBrace {
                    for_loop.body = parse_block(tokens)?;
                }
                slot = Some(Node::ForLoop(for_loop));
            },
            TokenType::LeftParen => {
                let Some(callee) = slot.take() else {
                    return Err(ParseError::StrayParen { token: tokens.current()?.clone() });
                };
                let arguments = parse_arguments(tokens)?;
                slot = Some(Node::Call { callee: Box::new(callee),
                                         arguments });
            },
            TokenType::Period => {
                let period = tokens.pop()?;
                let Some(object) = slot.take() else {
                    return Err(ParseError::StrayPeriod { token: period });
                };
                let member = tokens.pop_of(TokenType::Identifier)?;
                tokens.current_of(TokenType::LeftParen)?;
                let arguments = parse_arguments(tokens)?;
                slot = Some(Node::MemberCall { object: Box::new(object),
                                               member,
                                               arguments });
            },
            _ => break,
        }
    }

    match slot {
        Some(node) => Ok(node),
        None => Err(ParseError::UnexpectedToken { token: tokens.current()?.clone() }),
    }
}

/// Puts a leaf node into an empty slot.
fn place(slot: &mut Option<Node>, node: Node) -> ParseResult<()> {
    if slot.is_some() {
        return Err(ParseError::UnexpectedToken { token: node.token().clone() });
    }
    *slot = Some(node);
    Ok(())
}
