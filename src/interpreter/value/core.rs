use crate::util::num::i64_to_f64_lossy;

/// Represents a numeric value in the evaluator.
///
/// The integral/real split is observable: `12` prints as `12` while `12,`
/// prints as `12.0`. Mixed operations promote the integer side to a real, and
/// so does integer arithmetic that would leave the `i64` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer, from a comma-free literal.
    Integer(i64),
    /// A double precision value, from a comma literal, a constant, an
    /// inexact division or an integer result too large for `i64`.
    Real(f64),
}

impl Number {
    /// Returns the value as an `f64`, rounding integers beyond `2^53`.
    ///
    /// # Example
    /// ```
    /// use virgule::interpreter::value::core::Number;
    ///
    /// assert_eq!(Number::Integer(10).as_real(), 10.0);
    /// assert_eq!(Number::Real(1.5).as_real(), 1.5);
    /// ```
    #[must_use]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64_lossy(n),
            Self::Real(r) => r,
        }
    }

    /// Returns `true` for integral and real zero alike.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }
}

impl std::ops::Neg for Number {
    type Output = Self;

    /// Arithmetic negation. `-i64::MIN` has no integer form and becomes a
    /// real.
    ///
    /// # Example
    /// ```
    /// use virgule::interpreter::value::core::Number;
    ///
    /// assert_eq!(-Number::Integer(5), Number::Integer(-5));
    /// assert_eq!(-Number::Integer(i64::MIN), Number::Real(9_223_372_036_854_775_808.0));
    /// ```
    fn neg(self) -> Self {
        match self {
            Self::Integer(n) => {
                n.checked_neg().map_or_else(|| Self::Real(-i64_to_f64_lossy(n)), Self::Integer)
            },
            Self::Real(r) => Self::Real(-r),
        }
    }
}

impl std::fmt::Display for Number {
    /// Integers print as plain digits. Reals always show a decimal point,
    /// `1.0` rather than `1`, so the two kinds stay distinguishable. Reals
    /// with a decimal exponent below -4 or from 16 up use exponent notation
    /// with a signed, two-digit exponent (`1e-05`, `1e+16`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write_real(f, *r),
        }
    }
}

fn write_real(f: &mut std::fmt::Formatter<'_>, r: f64) -> std::fmt::Result {
    if r.is_nan() {
        return write!(f, "nan");
    }
    if r.is_infinite() {
        return write!(f, "{r}");
    }

    // `{:e}` keeps the shortest round-trip digits, so its exponent is the
    // one the digits are printed with.
    let scientific = format!("{r:e}");
    if let Some((mantissa, exponent)) = scientific.split_once('e')
       && let Ok(exponent) = exponent.parse::<i32>()
       && !(-4..16).contains(&exponent)
    {
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    if r.fract() == 0.0 { write!(f, "{r:.1}") } else { write!(f, "{r}") }
}
