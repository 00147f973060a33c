use std::path::Path;

use sprout::{
    error::ParseError,
    interpreter::lexer::{Lexer, Source, Token, TokenType, token::relative_to, tokenize},
};

fn lex(text: &str) -> Vec<Token> {
    tokenize(&Source::new(text)).unwrap_or_else(|e| panic!("Failed to lex {text:?}: {e}"))
}

fn texts(text: &str) -> Vec<String> {
    lex(text).into_iter().map(|token| token.text).collect()
}

fn types(text: &str) -> Vec<TokenType> {
    lex(text).into_iter().map(|token| token.ty).collect()
}

#[test]
fn multi_character_operators_lex_as_one_token() {
    let mut checked = 0;
    for &ty in TokenType::OPERATORS {
        let spelling = ty.spelling().expect("operators have a spelling");
        if spelling.chars().count() < 2 {
            continue;
        }
        checked += 1;
        assert_eq!(types(spelling), [ty], "{spelling:?} was split");
    }
    assert!(checked > 0, "No multi-character operators found");
}

#[test]
fn less_equal_is_never_split() {
    assert_eq!(types("a<=b"),
               [TokenType::Identifier, TokenType::LessEqual, TokenType::Identifier]);
    assert_eq!(types("a < = b"),
               [TokenType::Identifier, TokenType::Less, TokenType::Equal, TokenType::Identifier]);
}

#[test]
fn every_operator_spelling_round_trips() {
    for &ty in TokenType::OPERATORS.iter().chain(TokenType::KEYWORDS) {
        let spelling = ty.spelling().expect("keywords and operators have a spelling");
        let tokens = lex(spelling);
        assert_eq!(tokens.len(), 1, "{spelling:?}");
        assert_eq!(tokens[0].ty, ty);
        assert_eq!(tokens[0].text, spelling);
    }
}

#[test]
fn line_comments_are_skipped() {
    assert_eq!(texts("1 + // note\n2"), ["1", "+", "2"]);
    assert_eq!(texts("// only a comment"), Vec::<String>::new());
    assert_eq!(texts("x; // trailing\n// full line\ny;"), ["x", ";", "y", ";"]);
}

#[test]
fn concatenated_texts_reproduce_the_input_without_whitespace() {
    let input = "let x;\n\tx = std.open(\"data.txt\");\nfor (let line in x) { std.println(line); }";
    let joined: String = texts(input).concat();
    let expected: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(joined, expected);
}

#[test]
fn keywords_need_the_whole_word() {
    assert_eq!(types("let letter format for"),
               [TokenType::Let, TokenType::Identifier, TokenType::Identifier, TokenType::For]);
}

#[test]
fn digit_separators_are_removed() {
    let tokens = lex("1'000'000 2'5.0'1");
    assert_eq!(tokens[0].ty, TokenType::NumericLiteral);
    assert_eq!(tokens[0].text, "1000000");
    assert_eq!(tokens[1].text, "25.01");
}

#[test]
fn string_literals_keep_their_quotes() {
    let tokens = lex("\"hello, world\" x");
    assert_eq!(tokens[0].ty, TokenType::StringLiteral);
    assert_eq!(tokens[0].text, "\"hello, world\"");
    assert_eq!(tokens[1].text, "x");
}

#[test]
fn unterminated_string_is_an_error() {
    let result = tokenize(&Source::new("let s = \"abc"));
    assert!(matches!(result, Err(ParseError::UnterminatedString { .. })));
}

#[test]
fn unknown_characters_are_dropped() {
    assert_eq!(texts("x $ y"), ["x", "y"]);
}

#[test]
fn tokens_carry_line_and_column() {
    let tokens = lex("let x;\n  y = \"a\nb\" z");
    let y = &tokens[3];
    assert_eq!((y.location.line, y.location.column), (2, 3));

    let string = &tokens[5];
    assert_eq!(string.ty, TokenType::StringLiteral);
    assert_eq!((string.location.line, string.location.column), (2, 7));

    let z = tokens.last().unwrap();
    assert_eq!(z.text, "z");
    assert_eq!((z.location.line, z.location.column), (3, 4));
}

#[test]
fn end_of_input_repeats() {
    let source = Source::new("x");
    let mut lexer = Lexer::new(&source);

    assert_eq!(lexer.pop().unwrap().text, "x");
    assert!(lexer.current().unwrap().is_eof());
    assert!(lexer.next().unwrap().is_eof());
    for _ in 0..3 {
        assert!(lexer.pop().unwrap().is_eof());
    }
}

#[test]
fn asserting_peeks_check_the_type() {
    let source = Source::new("f(x)");
    let mut lexer = Lexer::new(&source);

    assert!(lexer.current_of(TokenType::Identifier).is_ok());
    assert!(lexer.next_of(TokenType::LeftParen).is_ok());
    assert!(matches!(lexer.next_of(TokenType::Comma),
                     Err(ParseError::TypeMismatch { expected: TokenType::Comma, .. })));

    lexer.consume().unwrap();
    assert!(lexer.pop_of(TokenType::RightParen).is_err());
    assert_eq!(lexer.pop().unwrap().text, "x");
}

#[test]
fn operators_keep_their_binding_power() {
    assert_eq!(TokenType::Period.binding_power(), Some(2));
    assert_eq!(TokenType::Star.binding_power(), Some(5));
    assert_eq!(TokenType::Plus.binding_power(), Some(6));
    assert_eq!(TokenType::LessEqual.binding_power(), Some(9));
    assert_eq!(TokenType::EqualEqual.binding_power(), Some(10));
    assert_eq!(TokenType::Equal.binding_power(), Some(16));
    assert_eq!(TokenType::PlusEqual.binding_power(), Some(16));
    assert_eq!(TokenType::Comma.binding_power(), None);
    assert_eq!(TokenType::Identifier.binding_power(), None);
}

#[test]
fn paths_are_made_relative() {
    assert_eq!(relative_to(Path::new("/tmp/x.sp"), Path::new("/tmp/ws")), Path::new("../x.sp"));
    assert_eq!(relative_to(Path::new("/a/b/c.sp"), Path::new("/a/d/e")),
               Path::new("../../b/c.sp"));
    assert_eq!(relative_to(Path::new("/ws/scripts/x.sp"), Path::new("/ws")),
               Path::new("scripts/x.sp"));
}

#[test]
fn locations_show_paths_relative_to_the_working_directory() {
    let source = Source::from_path("scripts/hello.sp").expect("scripts/hello.sp exists");
    let token = &tokenize(&source).unwrap()[0];
    assert_eq!(token.location.to_string(), "scripts/hello.sp:2:1");

    let outside = std::env::temp_dir().join(format!("sprout-{}-outside.sp", std::process::id()));
    std::fs::write(&outside, "let 1;").unwrap();
    let source = Source::from_path(&outside).unwrap();
    let shown = tokenize(&source).unwrap()[1].location.to_string();
    std::fs::remove_file(&outside).ok();

    assert!(shown.starts_with("../"), "{shown}");
    assert!(shown.ends_with(&format!("sprout-{}-outside.sp:1:5", std::process::id())), "{shown}");
}
