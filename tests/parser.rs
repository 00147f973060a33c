use sprout::{
    ast::{Node, Number},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Source, TokenType},
        parser::{core::parse_expression, module::parse_module, statement::parse_statement},
        value::{core::Value, function::Body},
    },
};

fn statement(text: &str) -> Result<Node, ParseError> {
    let source = Source::new(text);
    parse_statement(&mut Lexer::new(&source))
}

fn parse(text: &str) -> Node {
    statement(text).unwrap_or_else(|e| panic!("Failed to parse {text:?}: {e}"))
}

fn main_body(text: &str) -> Vec<Node> {
    let source = Source::new(text);
    let module = parse_module(&mut Lexer::new(&source)).unwrap_or_else(|e| panic!("{e}"));
    let main = Value::from(module).member_function("main").unwrap();
    match &main.body {
        Body::Script(block) => block.to_vec(),
        Body::Native(_) => panic!("main is native"),
    }
}

#[test]
fn chained_assignment_nests_to_the_right() {
    let Node::Assignment { left, right } = parse("a = b = c;") else {
        panic!("expected an assignment");
    };
    assert!(matches!(*left, Node::Variable { ref name } if name.text == "a"));

    let Node::Assignment { left, right } = *right else {
        panic!("expected a nested assignment");
    };
    assert!(matches!(*left, Node::Variable { ref name } if name.text == "b"));
    assert!(matches!(*right, Node::Variable { ref name } if name.text == "c"));
}

#[test]
fn declaration_with_initializer() {
    let Node::Assignment { left, right } = parse("let x = \"hi\";") else {
        panic!("expected an assignment");
    };
    assert!(matches!(*left, Node::Declaration { ref name } if name.text == "x"));
    assert!(matches!(*right, Node::StringLiteral { ref token } if token.text == "\"hi\""));
}

#[test]
fn declaration_must_come_first() {
    assert!(matches!(statement("x let y;"), Err(ParseError::MisplacedDeclaration { .. })));
}

#[test]
fn declaration_needs_an_identifier() {
    assert!(matches!(statement("let 1;"),
                     Err(ParseError::TypeMismatch { expected: TokenType::Identifier, .. })));
}

#[test]
fn assignment_needs_a_target() {
    let Err(ParseError::MissingAssignmentTarget { token }) = statement("= 3;") else {
        panic!("expected a missing target");
    };
    assert_eq!(token.text, "=");
}

#[test]
fn stray_punctuation_is_rejected() {
    assert!(matches!(statement(".foo();"), Err(ParseError::StrayPeriod { .. })));
    assert!(matches!(statement("(x);"), Err(ParseError::StrayParen { .. })));
}

#[test]
fn two_leaves_in_a_row_are_rejected() {
    let Err(ParseError::UnexpectedToken { token }) = statement("a b;") else {
        panic!("expected an unexpected token");
    };
    assert_eq!(token.text, "b");
    assert!(statement("\"a\" 1;").is_err());
}

#[test]
fn calls_and_member_calls() {
    let Node::Call { callee, arguments } = parse("f(x, \"y\", g());") else {
        panic!("expected a call");
    };
    assert!(matches!(*callee, Node::Variable { .. }));
    assert_eq!(arguments.len(), 3);
    assert!(matches!(arguments[2], Node::Call { .. }));

    let Node::MemberCall { object,
                           member,
                           arguments, } = parse("std.println(x);")
    else {
        panic!("expected a member call");
    };
    assert!(matches!(*object, Node::Variable { ref name } if name.text == "std"));
    assert_eq!(member.text, "println");
    assert_eq!(arguments.len(), 1);

    assert!(matches!(parse("f();"), Node::Call { ref arguments, .. } if arguments.is_empty()));
    assert!(matches!(parse("f()();"), Node::Call { ref callee, .. } if matches!(**callee, Node::Call { .. })));
}

#[test]
fn member_access_requires_a_call() {
    assert!(matches!(statement("x.y;"),
                     Err(ParseError::TypeMismatch { expected: TokenType::LeftParen, .. })));
}

#[test]
fn trailing_comma_is_rejected() {
    let Err(ParseError::UnexpectedToken { token }) = statement("f(a,);") else {
        panic!("expected an unexpected token");
    };
    assert_eq!(token.ty, TokenType::RightParen);
    assert!(statement("f(a b);").is_err());
    assert!(statement("f(a").is_err());
}

#[test]
fn empty_array_literal_only() {
    assert!(matches!(parse("[];"), Node::ArrayLiteral { .. }));
    assert!(matches!(statement("[1];"),
                     Err(ParseError::TypeMismatch { expected: TokenType::RightBracket, .. })));
    assert!(statement("x [];").is_err());
}

#[test]
fn literals() {
    assert!(matches!(parse("42;"), Node::NumericLiteral { value: Number::Int(42), .. }));
    assert!(matches!(parse("1'000;"), Node::NumericLiteral { value: Number::Int(1000), .. }));
    assert!(matches!(parse("2.5;"), Node::NumericLiteral { value: Number::Float(x), .. } if (x - 2.5).abs() < f64::EPSILON));
    assert!(matches!(parse("true;"), Node::BoolLiteral { value: true, .. }));
    assert!(matches!(parse("false;"), Node::BoolLiteral { value: false, .. }));
    assert!(matches!(parse("this;"), Node::Variable { ref name } if name.text == "this"));
    assert!(matches!(statement("99999999999999999999;"), Err(ParseError::MalformedNumber { .. })));
}

#[test]
fn empty_statement_is_rejected() {
    assert!(matches!(statement(";"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(statement(""), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn statements_need_terminators() {
    assert!(statement("x").is_ok());
    let Err(ParseError::MissingTerminator { token }) = statement("let x }") else {
        panic!("expected a missing terminator");
    };
    assert_eq!(token.text, "}");
}

#[test]
fn for_loop_header_and_body() {
    let Node::ForLoop(for_loop) = parse("for (let line in std.open(\"f\")) { std.println(line); x }")
    else {
        panic!("expected a for loop");
    };
    assert!(matches!(*for_loop.declaration, Node::Declaration { ref name } if name.text == "line"));
    assert!(matches!(*for_loop.range, Node::MemberCall { ref member, .. } if member.text == "open"));
    assert_eq!(for_loop.body.len(), 2);
}

#[test]
fn for_loop_without_body() {
    let Node::ForLoop(for_loop) = parse("for (let i in r);") else {
        panic!("expected a for loop");
    };
    assert!(for_loop.body.is_empty());
}

#[test]
fn malformed_for_loops() {
    assert!(statement("for let i in r;").is_err());
    assert!(statement("for (let i of r);").is_err());
    assert!(statement("for (let i in r;").is_err());
    assert!(statement("for (let i in r) { a b };").is_err());
    assert!(statement("for (let i in r) { a; b").is_err());
}

#[test]
fn stop_condition_ends_an_expression() {
    let source = Source::new("x in y");
    let mut lexer = Lexer::new(&source);
    let is_in = |token: &sprout::interpreter::lexer::Token| token.text == "in";

    let node = parse_expression(&mut lexer, Some(&is_in)).unwrap();
    assert!(matches!(node, Node::Variable { ref name } if name.text == "x"));
    assert_eq!(lexer.current().unwrap().text, "in");
}

#[test]
fn module_collects_statements_into_main() {
    let body = main_body("let x;\nx = 1;\nstd.println(x)");
    assert_eq!(body.len(), 3);
    assert!(main_body("").is_empty());
}

#[test]
fn module_stops_at_first_error() {
    let source = Source::new("let x;\nlet 1;");
    let error = parse_module(&mut Lexer::new(&source)).unwrap_err();
    assert_eq!(error.token().location.line, 2);
    assert_eq!(error.token().location.column, 5);
}
