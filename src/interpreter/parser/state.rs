/// What the parser expects from the next token.
///
/// Exactly one state is live at a time and every token moves it
/// deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Start of an expression.
    Expr,
    /// Start of an expression, right after a leading unary minus.
    NegExpr,
    /// A complete operand was read; a binary operator or the end follows.
    Operation,
    /// The right-hand operand of a pending binary operator.
    Operand,
    /// The right-hand operand, right after a unary minus.
    NegOperand,
}

impl ParseState {
    /// The category reported when a token is illegal in this state.
    ///
    /// # Example
    /// ```
    /// use virgule::interpreter::parser::state::{Expected, ParseState};
    ///
    /// assert_eq!(ParseState::NegExpr.expected(), Expected::Expression);
    /// assert_eq!(ParseState::NegOperand.expected(), Expected::Digit);
    /// ```
    #[must_use]
    pub const fn expected(self) -> Expected {
        match self {
            Self::Expr | Self::NegExpr => Expected::Expression,
            Self::Operation => Expected::Operator,
            Self::Operand => Expected::Operand,
            Self::NegOperand => Expected::Digit,
        }
    }

    /// The state entered after a unary minus read in `self`, if one is legal.
    #[must_use]
    pub const fn negated(self) -> Option<Self> {
        match self {
            Self::Expr => Some(Self::NegExpr),
            Self::Operand => Some(Self::NegOperand),
            _ => None,
        }
    }
}

/// Category of a syntax error, derived from the parse state alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// An expression was expected.
    Expression,
    /// A binary operator or the end of input was expected.
    Operator,
    /// The operand of a binary operator was expected.
    Operand,
    /// A number was expected after a unary minus.
    Digit,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phrase = match self {
            Self::Expression => "expression attendue",
            Self::Operator => "opération attendue",
            Self::Operand => "opérande attendue",
            Self::Digit => "chiffre attendu",
        };
        write!(f, "{phrase}")
    }
}
