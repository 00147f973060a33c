/// Lexical and syntax errors.
///
/// Defines all error types that can occur while lexing and parsing source
/// code. Every variant carries the offending token, so the location of the
/// failure is always known.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a module:
/// unresolved names, missing record members, failed downcasts and duplicate
/// declarations.
pub mod runtime_error;
/// Source-context rendering for errors.
///
/// Turns a token location into the `file:line:column: error: "text"` header
/// followed by the surrounding source lines and a caret marker.
pub mod diagnostic;

pub use diagnostic::Diagnostic;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
