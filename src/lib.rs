//! # sprout
//!
//! sprout is a small, dynamically typed scripting language written in Rust.
//! Scripts are lexed, parsed into a tree of nodes and run by a tree-walking
//! evaluator. Functions are dynamically scoped: names resolve along the live
//! call chain.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::block::run_module,
    lexer::{Lexer, Source},
    parser::module::parse_module,
    stdlib::{self, Output},
    value::core::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent a
/// parsed statement as a tree. The tree is built by the parser and executed
/// by the evaluator; it is never modified afterwards.
///
/// # Responsibilities
/// - Defines one node kind per language construct.
/// - Keeps the originating token on every node for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code, and the diagnostic renderer that quotes the offending
/// source.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches token locations for context.
/// - Renders source snippets with a caret under the failing token.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the standard library.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;

/// Parses and runs a source, writing library output to `output`.
///
/// A fresh standard library record is created for the run and bound as `std`.
/// Returns the value of the module's last statement.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error. Nothing runs when the
/// source fails to parse.
pub fn run_source(source: &Source, output: Output) -> Result<Value, Box<dyn std::error::Error>> {
    let module = parse_module(&mut Lexer::new(source))?;
    Ok(run_module(&module, stdlib::create(output))?)
}

/// Returns the final evaluation result after execution.
///
/// This function parses and runs the provided source text with library
/// output going to standard output.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use sprout::{get_result, interpreter::value::core::Value};
///
/// // The value of the last statement is returned.
/// let result = get_result("let x; x = 3; x;").unwrap();
/// assert_eq!(result, Value::Int(3));
///
/// // Example with an intentional error (unknown variable).
/// let result = get_result("let y; y = x;");
/// assert!(result.is_err());
/// ```
pub fn get_result(text: &str) -> Result<Value, Box<dyn std::error::Error>> {
    run_source(&Source::new(text), stdlib::stdout())
}
