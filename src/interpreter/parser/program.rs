use crate::interpreter::lexer::Token;

/// A finished postfix program.
///
/// Every operator follows its operands, so the evaluator needs neither
/// parentheses nor a precedence table. `Nop` tokens mark where closed
/// sub-expressions ended and are skipped when folding.
///
/// Displays as space-separated postfix text.
///
/// # Example
/// ```
/// use virgule::{compile, interpreter::symbols::Symbols};
///
/// let program = compile("1+2*3", Symbols::STANDARD).unwrap();
/// assert_eq!(program.to_string(), "1 2 3 * +");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    tokens: Vec<Token>,
}

impl Program {
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The postfix tokens, in evaluation order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }

            write!(f, "{}", token.kind)?;
        }

        Ok(())
    }
}
