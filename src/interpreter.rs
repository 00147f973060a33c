/// The evaluator module executes parsed nodes against execution frames.
///
/// Frames form a chain that follows the live call nesting, so name resolution
/// is dynamically scoped: a function body sees the bindings of whoever called
/// it.
///
/// # Responsibilities
/// - Evaluates nodes: declarations, assignments, variable access, literals,
///   calls and loops.
/// - Implements the calling convention shared by script and native functions.
/// - Reports runtime errors such as unresolved names or failed downcasts.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a lookahead-buffered
/// stream of tokens: keywords, operators, punctuation, identifiers and
/// literals, each with its source location. Comments and whitespace are
/// skipped.
///
/// # Responsibilities
/// - Converts the input character stream into located tokens.
/// - Applies maximal munch to operator spellings.
/// - Reports unterminated string literals.
pub mod lexer;
/// The parser module builds the node tree from tokens.
///
/// Every statement becomes one node, built in a single expression slot.
/// A module's statements become the body of its `main` function.
///
/// # Responsibilities
/// - Converts tokens into nodes: declarations, assignments, calls, member
///   calls, literals and `for` loops.
/// - Enforces statement terminators.
/// - Reports syntax errors pointing at the offending token.
pub mod parser;
/// The value module defines the runtime data types.
///
/// Scalars (`Void`, `Bool`, `Int`, `Float`, `String`) are stored inline;
/// records, functions, arrays and files are shared objects.
pub mod value;
/// The standard library record bound as `std` in every module.
pub mod stdlib;
