/// Core evaluation logic.
///
/// Contains the execution frame (`Context`), name resolution along the frame
/// chain and the dispatch over node kinds.
pub mod core;

/// Function calls.
///
/// Implements the calling convention shared by script and native functions,
/// plain calls and member-function calls.
pub mod function;

/// Block and module execution.
///
/// Runs statement lists in order and starts a parsed module's `main`.
pub mod block;

/// `for` loop evaluation.
pub mod for_loop;
