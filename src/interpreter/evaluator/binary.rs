use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::Operator,
        value::core::Number,
    },
    util::num::divide_integers,
};

impl Evaluator {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Two integers combine with checked `i64` arithmetic; their quotient
    /// stays an integer only when the division is exact, and a result that
    /// leaves the `i64` range is recomputed as a real. If either operand is
    /// real both are promoted and the operation is done in double precision.
    /// The operator must be one of `Add`, `Sub`, `Mul` or `Div`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for an integral or real zero divisor.
    ///
    /// # Example
    /// ```
    /// use virgule::interpreter::{
    ///     evaluator::core::Evaluator,
    ///     lexer::Operator,
    ///     value::core::Number,
    /// };
    ///
    /// let sum = Evaluator::eval_binary(Operator::Add, Number::Integer(12), Number::Real(3.5));
    /// assert_eq!(sum.unwrap(), Number::Real(15.5));
    ///
    /// let quarter = Evaluator::eval_binary(Operator::Div, Number::Integer(1), Number::Integer(4));
    /// assert_eq!(quarter.unwrap(), Number::Real(0.25));
    ///
    /// let big = Evaluator::eval_binary(Operator::Add, Number::Integer(i64::MAX), Number::Integer(1));
    /// assert_eq!(big.unwrap(), Number::Real(9_223_372_036_854_775_808.0));
    /// ```
    pub fn eval_binary(op: Operator, left: Number, right: Number) -> EvalResult<Number> {
        use Number::{Integer, Real};
        use Operator::{Add, Div, Mul, Neg, Sub};

        if let (Integer(a), Integer(b)) = (left, right) {
            let exact = match op {
                Add => a.checked_add(b),
                Sub => a.checked_sub(b),
                Mul => a.checked_mul(b),
                Div => return divide_integers(a, b).ok_or(RuntimeError::DivisionByZero),
                Neg => unreachable!("negation is unary"),
            };
            return Ok(exact.map_or_else(|| Real(Self::eval_real(op, left.as_real(), right.as_real())),
                                        Integer));
        }

        if op == Div && right.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }
        Ok(Real(Self::eval_real(op, left.as_real(), right.as_real())))
    }

    fn eval_real(op: Operator, a: f64, b: f64) -> f64 {
        match op {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div => a / b,
            Operator::Neg => unreachable!("negation is unary"),
        }
    }
}
