use crate::interpreter::parser::state::Expected;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the zero-based character offset of the fault so the
/// caller can draw a caret under the offending input.
pub enum ParseError {
    /// A character matched none of the lexical classes.
    UnknownCharacter {
        /// The raw character (or characters) that was not recognized.
        character: String,
        /// Character offset of the unknown input.
        position:  usize,
    },
    /// A token is not a legal continuation of the current parse state.
    Syntax {
        /// What the parser was waiting for, derived from its state.
        expected: Expected,
        /// The displayed value of the offending token.
        found:    String,
        /// Character offset of the offending token.
        position: usize,
    },
    /// The input ended while a `(` was still open.
    UnbalancedParenthesis {
        /// Character offset of the end of input.
        position: usize,
    },
}

impl ParseError {
    /// Returns the character offset the error points at.
    ///
    /// # Example
    /// ```
    /// use virgule::error::ParseError;
    ///
    /// let err = ParseError::UnbalancedParenthesis { position: 4 };
    /// assert_eq!(err.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownCharacter { position, .. }
            | Self::Syntax { position, .. }
            | Self::UnbalancedParenthesis { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, .. } => write!(f, "entrée inconnue {character}"),
            Self::Syntax { expected, found, .. } => write!(f, "{expected}, \"{found}\" trouvé"),
            Self::UnbalancedParenthesis { .. } => write!(f, "\")\" manquante"),
        }
    }
}

impl std::error::Error for ParseError {}
