use crate::interpreter::{
    evaluator::block::MAIN,
    lexer::Lexer,
    parser::{core::ParseResult, statement::parse_statement},
    value::{
        function::Function,
        record::{Record, RecordRef},
    },
};

/// Parses a whole module.
///
/// Statements are parsed until the end of input and become the body of a
/// parameterless function stored as `main` in the returned record.
///
/// # Errors
/// Fails with the first lexing or parsing error.
///
/// # Example
/// ```
/// use sprout::interpreter::{
///     lexer::{Lexer, Source},
///     parser::module::parse_module,
/// };
///
/// let source = Source::new("let x;\nx = \"hello\";\nstd.println(x)");
/// let module = parse_module(&mut Lexer::new(&source)).unwrap();
///
/// let names: Vec<String> = module.borrow().names().map(String::from).collect();
/// assert_eq!(names, ["main"]);
/// ```
pub fn parse_module(tokens: &mut Lexer<'_>) -> ParseResult<RecordRef> {
    let mut body = Vec::new();
    while !tokens.current()?.is_eof() {
        body.push(parse_statement(tokens)?);
    }

    let mut module = Record::new();
    module.set(MAIN, Function::new(Vec::new(), body.into()).into());
    Ok(module.into_shared())
}
