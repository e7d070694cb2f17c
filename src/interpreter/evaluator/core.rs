use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        lexer::{Operator, TokenKind},
        parser::Program,
        value::core::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Folds postfix programs into numbers.
///
/// Holds the operand stack. It is emptied by every call to
/// [`Evaluator::reduce`], so one evaluator can be reused across programs
/// without carrying anything over.
#[derive(Debug, Default)]
pub struct Evaluator {
    operands: Vec<Number>,
}

impl Evaluator {
    #[must_use]
    pub const fn new() -> Self {
        Self { operands: Vec::new() }
    }

    /// Folds a postfix program into its single result.
    ///
    /// Numbers are pushed, `Nop` is skipped, binary operators pop the right
    /// operand then the left one, and `Neg` pops one operand.
    ///
    /// # Errors
    /// - `DivisionByZero` if a `/` meets a zero divisor.
    /// - `MalformedProgram` if the program underflows the operand stack,
    ///   leaves more than one value, or holds a token that is not part of a
    ///   postfix program.
    ///
    /// # Example
    /// ```
    /// use virgule::{
    ///     compile,
    ///     interpreter::{evaluator::core::Evaluator, symbols::Symbols, value::core::Number},
    /// };
    ///
    /// let program = compile("7-2*3", Symbols::STANDARD).unwrap();
    /// let result = Evaluator::new().reduce(&program).unwrap();
    ///
    /// assert_eq!(result, Number::Integer(1));
    /// ```
    pub fn reduce(&mut self, program: &Program) -> EvalResult<Number> {
        self.operands.clear();

        for token in program.tokens() {
            match &token.kind {
                TokenKind::Number(value) => self.operands.push(*value),
                TokenKind::Nop => {},
                TokenKind::Op(Operator::Neg) => {
                    let value = self.pop()?;
                    self.operands.push(Self::eval_unary(Operator::Neg, value));
                },
                TokenKind::Op(op) => {
                    let right = self.pop()?;
                    let left = self.pop()?;
                    self.operands.push(Self::eval_binary(*op, left, right)?);
                },
                TokenKind::POpen
                | TokenKind::PClose
                | TokenKind::Identifier(_)
                | TokenKind::Keyword(_)
                | TokenKind::Eof
                | TokenKind::Mismatch(_) => {
                    return Err(RuntimeError::MalformedProgram { remaining: self.operands.len() });
                },
            }

            trace!(token = %token.kind, depth = self.operands.len(), "reduced token");
        }

        match self.operands.as_slice() {
            [result] => {
                let result = *result;
                self.operands.clear();
                Ok(result)
            },
            rest => Err(RuntimeError::MalformedProgram { remaining: rest.len() }),
        }
    }

    fn pop(&mut self) -> EvalResult<Number> {
        self.operands.pop().ok_or(RuntimeError::MalformedProgram { remaining: 0 })
    }
}
