/// The single-pass driver.
///
/// Reads tokens once, left to right, dispatching on the current parse state
/// and the token kind. Parentheses push and pop an explicit context stack
/// instead of recursing.
pub mod core;

/// Parse states and the expectation each one reports on error.
pub mod state;

/// The reduction buffer and its local reorderings.
///
/// Holds the in-progress postfix encoding of one nesting level and implements
/// the binary-to-postfix swap, the precedence rotation and the splicing of a
/// closed sub-expression into its parent.
pub mod reduction;

/// The finished postfix program handed to the evaluator.
pub mod program;

pub use core::{ParseResult, parse};
pub use program::Program;
