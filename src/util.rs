/// Numeric conversion helpers.
///
/// This module provides the conversions between literal text, `i64` and `f64`
/// that the lexer and the evaluator share. Conversions that can fail return an
/// `Option` so each caller attaches its own error and position.
pub mod num;
