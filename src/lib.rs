//! # virgule
//!
//! virgule is an arithmetic expression evaluator. It reads infix text with
//! integers, comma decimals (`1,5`), `+ - * /`, parentheses, unary minus and
//! named constants, and returns a number or an error that points at the
//! offending character.
//!
//! Evaluation is a single pass: the lexer feeds the parser, which rewrites the
//! infix tokens into a postfix program as it goes, and the evaluator folds
//! that program with an operand stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::Evaluator,
        lexer::Lexer,
        parser::{Program, parse},
        symbols::Symbols,
        value::core::Number,
    },
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating an input line, and the umbrella [`error::Error`] returned by
/// [`evaluate`].
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Attaches character positions to parse errors for caret rendering.
/// - Renders errors the way the interactive prompt prints them.
pub mod error;
/// Runs an input line through lexing, parsing and evaluation.
///
/// This module ties together the lexer, the single-pass parser, the postfix
/// evaluator and the numeric value type.
///
/// # Responsibilities
/// - Coordinates the lexer, the parser and the evaluator.
/// - Defines tokens, parse states, postfix programs and numbers.
pub mod interpreter;
/// General numeric helpers.
///
/// Literal parsing and integer/real conversions shared by the lexer and the
/// evaluator.
pub mod util;

/// Evaluates an input line with the standard constants (`PI`, `E`).
///
/// # Errors
/// Returns [`Error::Parse`] for input that cannot be parsed, with the
/// character offset of the fault, and [`Error::Runtime`] for failures while
/// computing, such as division by zero.
///
/// # Examples
/// ```
/// use virgule::{evaluate, interpreter::value::core::Number};
///
/// assert_eq!(evaluate("12,+3,4").unwrap(), Number::Real(15.4));
/// assert_eq!(evaluate("1+2*3").unwrap(), Number::Integer(7));
///
/// let err = evaluate("(1+2").unwrap_err();
/// assert_eq!(err.position(), Some(4));
/// ```
pub fn evaluate(input: &str) -> Result<Number, Error> {
    evaluate_with(input, Symbols::STANDARD)
}

/// Evaluates an input line, resolving identifiers against `symbols`.
///
/// # Errors
/// Same as [`evaluate`].
///
/// # Examples
/// ```
/// use virgule::{evaluate_with, interpreter::{symbols::Symbols, value::core::Number}};
///
/// let symbols = Symbols::new(&[("DOZEN", Number::Integer(12))], &[]);
/// assert_eq!(evaluate_with("dozen/4", symbols).unwrap(), Number::Integer(3));
/// ```
pub fn evaluate_with(input: &str, symbols: Symbols<'_>) -> Result<Number, Error> {
    let program = compile(input, symbols)?;
    let result = Evaluator::new().reduce(&program)?;

    debug!(%input, %result, "evaluated");
    Ok(result)
}

/// Lexes and parses an input line into a postfix program, without
/// evaluating it.
///
/// # Errors
/// Returns a [`ParseError`] positioned at the offending character.
///
/// # Examples
/// ```
/// use virgule::{compile, interpreter::symbols::Symbols};
///
/// let program = compile("1+2*(-3+4)/5", Symbols::STANDARD).unwrap();
/// assert_eq!(program.to_string(), "1 2 -3 4 + NOP * 5 / +");
/// ```
pub fn compile(input: &str, symbols: Symbols<'_>) -> Result<Program, ParseError> {
    let program = parse(Lexer::new(input, symbols))?;

    debug!(%input, %program, "compiled");
    Ok(program)
}

/// Test utilities for enabling logging in tests.
#[doc(hidden)]
pub mod test_utils {
    /// Initializes a tracing subscriber that writes through the test harness.
    ///
    /// The level comes from `RUST_LOG` and defaults to `debug`. Calling it more
    /// than once is harmless.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        let _ = fmt().with_env_filter(EnvFilter::try_from_default_env()
                                          .unwrap_or_else(|_| EnvFilter::new("debug")))
                     .with_test_writer()
                     .try_init();
    }
}
