use crate::interpreter::{evaluator::core::Evaluator, lexer::Operator, value::core::Number};

impl Evaluator {
    /// Evaluates a unary operation. Only `Neg` is unary.
    ///
    /// Negating `i64::MIN` gives a real, like any other integer result that
    /// leaves the `i64` range.
    ///
    /// # Example
    /// ```
    /// use virgule::interpreter::{
    ///     evaluator::core::Evaluator,
    ///     lexer::Operator,
    ///     value::core::Number,
    /// };
    ///
    /// let v = Evaluator::eval_unary(Operator::Neg, Number::Integer(5));
    /// assert_eq!(v, Number::Integer(-5));
    /// ```
    #[must_use]
    pub fn eval_unary(op: Operator, value: Number) -> Number {
        match op {
            Operator::Neg => -value,
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div => {
                unreachable!("{op} is a binary operator")
            },
        }
    }
}
