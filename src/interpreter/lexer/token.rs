use std::{
    fmt, fs, iter,
    path::{Component, Path, PathBuf},
    rc::Rc,
};

use logos::Logos;

/// The closed set of lexical categories of the language.
///
/// Keywords and operators are matched by their exact spelling; identifiers,
/// numeric literals and string literals by their character class. Operators
/// are matched by longest spelling first, so `<=` is never split into `<` and
/// `=`.
///
/// Several keywords and operators are reserved but not used by the parser yet.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenType {
    /// `fn`
    #[token("fn")]
    Fn,
    /// `pub`
    #[token("pub")]
    Pub,
    /// `impl`
    #[token("impl")]
    Impl,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `let`
    #[token("let")]
    Let,
    /// `mut`
    #[token("mut")]
    Mut,
    /// `struct`
    #[token("struct")]
    Struct,
    /// `operator`
    #[token("operator")]
    Operator,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `enum`
    #[token("enum")]
    Enum,
    /// `int`
    #[token("int")]
    Int,
    /// `for`
    #[token("for")]
    For,
    /// `float`
    #[token("float")]
    Float,
    /// `double`
    #[token("double")]
    Double,
    /// `i8`
    #[token("i8")]
    I8,
    /// `i16`
    #[token("i16")]
    I16,
    /// `i32`
    #[token("i32")]
    I32,
    /// `i64`
    #[token("i64")]
    I64,
    /// `bool`
    #[token("bool")]
    Bool,
    /// `this`
    #[token("this")]
    This,
    /// `const`
    #[token("const")]
    Const,
    /// `match`
    #[token("match")]
    Match,
    /// `return`
    #[token("return")]
    Return,

    /// `.`
    #[token(".")]
    Period,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    ExclaimEqual,
    /// `&`
    #[token("&")]
    Amp,
    /// `=`
    #[token("=")]
    Equal,
    /// `<-`
    #[token("<-")]
    LeftArrow,
    /// `+=`
    #[token("+=")]
    PlusEqual,
    /// `-=`
    #[token("-=")]
    MinusEqual,
    /// `*=`
    #[token("*=")]
    StarEqual,
    /// `/=`
    #[token("/=")]
    SlashEqual,
    /// `%=`
    #[token("%=")]
    PercentEqual,

    /// `,`
    #[token(",")]
    Comma,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `[`
    #[token("[")]
    LeftBracket,
    /// `]`
    #[token("]")]
    RightBracket,
    /// `->`
    #[token("->")]
    Arrow,
    /// `!`
    #[token("!")]
    Exclaim,
    /// `@`
    #[token("@")]
    At,

    /// Identifiers such as `x`, `std` or `_tmp1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Numeric literals such as `42`, `3.5` or `1'000'000`.
    ///
    /// A single `.` may appear after the first digit. `'` separators are
    /// accepted anywhere after the first digit and removed from the token
    /// text.
    #[regex(r"[0-9][0-9']*(\.[0-9']*)?")]
    NumericLiteral,
    /// String literals, quotes included: `"text"`.
    #[regex(r#""[^"]*""#, string_literal)]
    StringLiteral,
    /// `// Comments` up to the end of the line. Never produced.
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks. Never produced.
    #[token("\n", newline)]
    Newline,
    /// Spaces, tabs and feeds. Never produced.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Whitespace,
    /// End of input.
    Eof,
    /// A token whose category could not be determined.
    Unknown,
}

/// Additional state carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts so that
/// every token can report a line and a column.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexerExtras {
    /// The current 1-based line.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl LexerExtras {
    /// State at the very start of a source.
    #[must_use]
    pub const fn new() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

fn newline(lex: &mut logos::Lexer<TokenType>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

fn string_literal(lex: &mut logos::Lexer<TokenType>) -> TokenType {
    let start = lex.span().start;
    let slice = lex.slice();
    if let Some(last) = slice.rfind('\n') {
        let breaks = slice.matches('\n').count();
        lex.extras.line += breaks;
        lex.extras.line_start = start + last + 1;
    }
    TokenType::StringLiteral
}

impl TokenType {
    /// Every keyword, in declaration order.
    pub const KEYWORDS: &'static [Self] = &[Self::Fn,
                                            Self::Pub,
                                            Self::Impl,
                                            Self::True,
                                            Self::False,
                                            Self::Let,
                                            Self::Mut,
                                            Self::Struct,
                                            Self::Operator,
                                            Self::If,
                                            Self::Else,
                                            Self::Enum,
                                            Self::Int,
                                            Self::For,
                                            Self::Float,
                                            Self::Double,
                                            Self::I8,
                                            Self::I16,
                                            Self::I32,
                                            Self::I64,
                                            Self::Bool,
                                            Self::This,
                                            Self::Const,
                                            Self::Match,
                                            Self::Return];

    /// Every operator and punctuation mark, in declaration order.
    pub const OPERATORS: &'static [Self] = &[Self::Period,
                                             Self::Star,
                                             Self::Slash,
                                             Self::Percent,
                                             Self::Plus,
                                             Self::Minus,
                                             Self::Less,
                                             Self::LessEqual,
                                             Self::Greater,
                                             Self::GreaterEqual,
                                             Self::EqualEqual,
                                             Self::ExclaimEqual,
                                             Self::Amp,
                                             Self::Equal,
                                             Self::LeftArrow,
                                             Self::PlusEqual,
                                             Self::MinusEqual,
                                             Self::StarEqual,
                                             Self::SlashEqual,
                                             Self::PercentEqual,
                                             Self::Comma,
                                             Self::PlusPlus,
                                             Self::Colon,
                                             Self::Semicolon,
                                             Self::LeftParen,
                                             Self::RightParen,
                                             Self::LeftBrace,
                                             Self::RightBrace,
                                             Self::LeftBracket,
                                             Self::RightBracket,
                                             Self::Arrow,
                                             Self::Exclaim,
                                             Self::At];

    /// The exact source spelling of a keyword or operator.
    ///
    /// Returns `None` for the literal classes (identifiers, numbers, strings)
    /// and for the markers that have no spelling.
    #[must_use]
    pub const fn spelling(self) -> Option<&'static str> {
        let text = match self {
            Self::Fn => "fn",
            Self::Pub => "pub",
            Self::Impl => "impl",
            Self::True => "true",
            Self::False => "false",
            Self::Let => "let",
            Self::Mut => "mut",
            Self::Struct => "struct",
            Self::Operator => "operator",
            Self::If => "if",
            Self::Else => "else",
            Self::Enum => "enum",
            Self::Int => "int",
            Self::For => "for",
            Self::Float => "float",
            Self::Double => "double",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Bool => "bool",
            Self::This => "this",
            Self::Const => "const",
            Self::Match => "match",
            Self::Return => "return",
            Self::Period => ".",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::EqualEqual => "==",
            Self::ExclaimEqual => "!=",
            Self::Amp => "&",
            Self::Equal => "=",
            Self::LeftArrow => "<-",
            Self::PlusEqual => "+=",
            Self::MinusEqual => "-=",
            Self::StarEqual => "*=",
            Self::SlashEqual => "/=",
            Self::PercentEqual => "%=",
            Self::Comma => ",",
            Self::PlusPlus => "++",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Arrow => "->",
            Self::Exclaim => "!",
            Self::At => "@",
            Self::Identifier
            | Self::NumericLiteral
            | Self::StringLiteral
            | Self::Comment
            | Self::Newline
            | Self::Whitespace
            | Self::Eof
            | Self::Unknown => return None,
        };
        Some(text)
    }

    /// The binding power of a binary operator; lower binds tighter.
    ///
    /// Kept for precedence climbing. The parser does not assemble binary
    /// expressions.
    #[must_use]
    pub const fn binding_power(self) -> Option<u8> {
        match self {
            Self::Period => Some(2),
            Self::Star | Self::Slash | Self::Percent => Some(5),
            Self::Plus | Self::Minus => Some(6),
            Self::Less | Self::LessEqual | Self::Greater | Self::GreaterEqual => Some(9),
            Self::EqualEqual | Self::ExclaimEqual => Some(10),
            Self::Amp => Some(11),
            Self::Equal
            | Self::LeftArrow
            | Self::PlusEqual
            | Self::MinusEqual
            | Self::StarEqual
            | Self::SlashEqual
            | Self::PercentEqual => Some(16),
            _ => None,
        }
    }

    /// A readable name such as `identifier`, `left_paren` or `let`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Period => "period",
            Self::Star => "star",
            Self::Slash => "slash",
            Self::Percent => "percent",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Less => "less",
            Self::LessEqual => "less_equal",
            Self::Greater => "greater",
            Self::GreaterEqual => "greater_equal",
            Self::EqualEqual => "equal_equal",
            Self::ExclaimEqual => "exclaim_equal",
            Self::Amp => "amp",
            Self::Equal => "equal",
            Self::LeftArrow => "left_arrow",
            Self::PlusEqual => "plus_equal",
            Self::MinusEqual => "minus_equal",
            Self::StarEqual => "star_equal",
            Self::SlashEqual => "slash_equal",
            Self::PercentEqual => "percent_equal",
            Self::Comma => "comma",
            Self::PlusPlus => "plus_plus",
            Self::Colon => "colon",
            Self::Semicolon => "semicolon",
            Self::LeftParen => "left_paren",
            Self::RightParen => "right_paren",
            Self::LeftBrace => "left_brace",
            Self::RightBrace => "right_brace",
            Self::LeftBracket => "left_bracket",
            Self::RightBracket => "right_bracket",
            Self::Arrow => "arrow",
            Self::Exclaim => "exclaim",
            Self::At => "at",
            Self::Identifier => "identifier",
            Self::NumericLiteral => "numeric_literal",
            Self::StringLiteral => "string_literal",
            Self::Comment => "comment",
            Self::Newline => "newline",
            Self::Whitespace => "whitespace",
            Self::Eof => "eof",
            Self::Unknown => "unknown",
            keyword => match keyword.spelling() {
                Some(text) => text,
                None => "unknown",
            },
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a token starts in its source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// 1-based line.
    pub line:   usize,
    /// 1-based column, counted in characters.
    pub column: usize,
    /// The file the token was read from, if any.
    pub path:   Option<Rc<Path>>,
}

impl fmt::Display for Location {
    /// Formats as `<file>:<line>:<column>`, with the file relative to the
    /// working directory and `unknown file` when there is none.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => {
                let shown = match std::env::current_dir() {
                    Ok(cwd) => relative_to(&canonical(&cwd.join(path)), &canonical(&cwd)),
                    Err(_) => path.to_path_buf(),
                };
                write!(f, "{}", shown.display())?;
            },
            None => f.write_str("unknown file")?,
        }
        write!(f, ":{}:{}", self.line, self.column)
    }
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Expresses the absolute `path` relative to the absolute directory `base`,
/// climbing out of `base` with `..` where the two diverge.
///
/// Paths without a common root, such as paths on different drives, are
/// returned unchanged.
///
/// # Examples
/// ```
/// use std::path::Path;
///
/// use sprout::interpreter::lexer::token::relative_to;
///
/// assert_eq!(relative_to(Path::new("/tmp/x.sp"), Path::new("/tmp/ws")), Path::new("../x.sp"));
/// assert_eq!(relative_to(Path::new("/ws/a/x.sp"), Path::new("/ws")), Path::new("a/x.sp"));
/// ```
#[must_use]
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let target: Vec<Component<'_>> = path.components().collect();
    let base: Vec<Component<'_>> = base.components().collect();
    let shared = target.iter()
                       .zip(&base)
                       .take_while(|(a, b)| a == b)
                       .count();
    if shared == 0 {
        return path.to_path_buf();
    }
    iter::repeat_n(Component::ParentDir, base.len() - shared).chain(target[shared..].iter().copied())
                                                            .collect()
}

/// A classified piece of source text.
///
/// Parsing dispatches on `ty`; a few productions also compare `text` with an
/// expected spelling (such as `in`, which is an ordinary identifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text. Numeric literals have their `'` separators removed.
    pub text:     String,
    /// The lexical category.
    pub ty:       TokenType,
    /// Where the token starts.
    pub location: Location,
}

impl Token {
    /// Creates a token without a location, mostly useful for lookups and
    /// tests.
    #[must_use]
    pub fn synthetic(text: impl Into<String>, ty: TokenType) -> Self {
        Self { text: text.into(),
               ty,
               location: Location::default() }
    }

    /// Whether the token is the end-of-input marker.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.ty == TokenType::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
