use crate::interpreter::{
    lexer::{Operator, Token, TokenKind},
    parser::program::Program,
};

/// The in-progress postfix encoding of one nesting level.
///
/// Whenever the parser sits in `Operation` the buffer is a complete postfix
/// expression for everything read at this level. In the other states its tail
/// may hold one pending binary operator and one pending unary-minus marker,
/// which the next operand resolves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReductionBuffer {
    tokens: Vec<Token>,
}

impl ReductionBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Appends every token of `other`, in order.
    pub fn append(&mut self, other: Self) {
        self.tokens.extend(other.tokens);
    }

    #[must_use]
    pub fn into_program(self) -> Program {
        Program::new(self.tokens)
    }

    /// Removes the pending unary-minus marker and returns its position.
    ///
    /// # Panics
    /// Panics if the buffer is empty; the parser only calls this in a `Neg*`
    /// state, which is entered by pushing the marker.
    pub fn take_marker(&mut self) -> usize {
        match self.tokens.pop() {
            Some(Token { kind: TokenKind::Op(_), position }) => position,
            other => unreachable!("expected a pending unary minus, found {other:?}"),
        }
    }

    /// Pushes the right-hand operand of a pending binary operator.
    ///
    /// The tail `[.., op, operand]` is swapped into postfix order
    /// `[.., operand, op]`. If that leaves a multiplicative operator right
    /// after an additive one, separated by the operand, the tail is rotated
    /// so the multiplication is applied first.
    ///
    /// # Example
    /// ```
    /// use virgule::interpreter::{
    ///     lexer::{Operator, Token, TokenKind},
    ///     parser::reduction::ReductionBuffer,
    ///     value::core::Number,
    /// };
    ///
    /// let number = |n| Token::new(TokenKind::Number(Number::Integer(n)), 0);
    /// let op = |op| Token::new(TokenKind::Op(op), 0);
    ///
    /// // 1 + 2 * 3, with `1 2 +` and `*` already in place.
    /// let mut buffer = ReductionBuffer::new();
    /// for token in [number(1), number(2), op(Operator::Add), op(Operator::Mul)] {
    ///     buffer.push(token);
    /// }
    /// buffer.push_operand(number(3));
    ///
    /// assert_eq!(buffer.into_program().to_string(), "1 2 3 * +");
    /// ```
    pub fn push_operand(&mut self, operand: Token) {
        self.tokens.push(operand);

        let len = self.tokens.len();
        if len >= 2 && matches!(self.tokens[len - 2].kind, TokenKind::Op(_)) {
            self.tokens.swap(len - 2, len - 1);

            if self.has_precedence_window() {
                self.rotate_precedence_window();
            }
        }
    }

    /// Splices a closed group into a level that was waiting for an operand.
    ///
    /// The pending operator moves after the group. A multiplicative pending
    /// operator that itself trails an additive one takes the additive one
    /// along, keeping `* /` ahead of `+ -` across the parenthesis.
    pub fn splice_operand(&mut self, group: Self) {
        let high = self.pop_operator();
        let low = if high.kind_is(Operator::is_multiplicative)
                     && self.tokens.last().is_some_and(|t| t.kind_is(Operator::is_additive))
        {
            Some(self.pop_operator())
        } else {
            None
        };

        self.append(group);
        self.tokens.push(high);
        self.tokens.extend(low);
    }

    /// Splices a closed group after a leading unary minus.
    ///
    /// The `Neg` marker pushed when the group opened moves after it, so the
    /// negation applies to the whole group.
    pub fn splice_negated(&mut self, group: Self) {
        let marker = self.pop_operator();
        self.append(group);
        self.tokens.push(marker);
    }

    fn pop_operator(&mut self) -> Token {
        match self.tokens.pop() {
            Some(token @ Token { kind: TokenKind::Op(_), .. }) => token,
            other => unreachable!("expected a pending operator, found {other:?}"),
        }
    }

    /// Tail shaped `[.., +|-, number, *|/]`.
    fn has_precedence_window(&self) -> bool {
        match self.tokens.as_slice() {
            [.., low, operand, high] => {
                low.kind_is(Operator::is_additive)
                && matches!(operand.kind, TokenKind::Number(_))
                && high.kind_is(Operator::is_multiplicative)
            },
            _ => false,
        }
    }

    /// `[.., low, operand, high]` becomes `[.., operand, high, low]`.
    fn rotate_precedence_window(&mut self) {
        debug_assert!(self.has_precedence_window(), "rotating a tail that is not a precedence window");

        let len = self.tokens.len();
        self.tokens[len - 3..].rotate_left(1);
    }
}

impl Token {
    /// Returns `true` if the token is an operator satisfying `predicate`.
    fn kind_is(&self, predicate: fn(Operator) -> bool) -> bool {
        matches!(self.kind, TokenKind::Op(op) if predicate(op))
    }
}
