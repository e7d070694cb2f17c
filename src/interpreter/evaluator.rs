/// Core evaluation logic.
///
/// Contains the operand stack and the fold over a postfix program.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `+ - * /` over integers and reals, with promotion to real and
/// division by zero detection.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements arithmetic negation.
pub mod unary;
