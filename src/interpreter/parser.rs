/// Expression parsing.
///
/// Contains the single-slot expression loop every statement, argument and
/// loop header goes through.
pub mod core;

/// Helpers shared by the productions: argument lists and numeric literals.
pub mod utils;

/// `for` loop headers.
pub mod for_loop;

/// Braced statement lists.
pub mod block;

/// Statements and their terminators.
pub mod statement;

/// Whole modules.
///
/// Turns a token stream into a record holding the module's `main` function.
pub mod module;
