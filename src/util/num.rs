use crate::interpreter::value::core::Number;

/// Separator between the integral and fractional digits of a literal.
pub const DECIMAL_SEPARATOR: char = ',';

/// Converts an `i64` to the nearest `f64`.
///
/// Values up to `2^53` in magnitude convert exactly; larger magnitudes are
/// rounded to the nearest representable double, the same promotion an integer
/// undergoes when mixed with a real or when its arithmetic overflows.
///
/// # Example
/// ```
/// use virgule::util::num::i64_to_f64_lossy;
///
/// assert_eq!(i64_to_f64_lossy(42), 42.0);
/// assert_eq!(i64_to_f64_lossy(i64::MIN), -9_223_372_036_854_775_808.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64_lossy(value: i64) -> f64 {
    value as f64
}

/// Parses a number literal as produced by the lexer.
///
/// A literal containing the decimal comma (`1,23`, `12,`) becomes a
/// [`Number::Real`]. A comma-free literal becomes a [`Number::Integer`], or a
/// [`Number::Real`] when its magnitude is beyond `i64`.
///
/// ## Returns
/// - `Some(Number)`: The parsed value.
/// - `None`: If the text is not a run of ASCII digits with an optional
///   decimal comma.
///
/// ## Example
/// ```
/// use virgule::{interpreter::value::core::Number, util::num::parse_number_literal};
///
/// assert_eq!(parse_number_literal("12"), Some(Number::Integer(12)));
/// assert_eq!(parse_number_literal("1,23"), Some(Number::Real(1.23)));
/// assert_eq!(parse_number_literal("12,"), Some(Number::Real(12.0)));
/// assert_eq!(parse_number_literal("99999999999999999999"), Some(Number::Real(1e20)));
/// assert_eq!(parse_number_literal("1e5"), None);
/// ```
#[must_use]
pub fn parse_number_literal(text: &str) -> Option<Number> {
    let (integral, fraction) = text.split_once(DECIMAL_SEPARATOR).unwrap_or((text, ""));
    if integral.is_empty()
       || !integral.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit())
    {
        return None;
    }

    if text.contains(DECIMAL_SEPARATOR) {
        // A trailing zero keeps `12,` a complete decimal without changing it.
        format!("{integral}.{fraction}0").parse::<f64>().ok().map(Number::Real)
    } else {
        text.parse::<i64>()
            .map(Number::Integer)
            .or_else(|_| text.parse::<f64>().map(Number::Real))
            .ok()
    }
}

/// Divides two integers, staying integral when the quotient is exact.
///
/// ## Returns
/// - `None`: If `divisor` is zero.
/// - `Some(Number::Integer)`: If `divisor` divides `dividend` exactly.
/// - `Some(Number::Real)`: Otherwise, computed in double precision.
///
/// ## Example
/// ```
/// use virgule::{interpreter::value::core::Number, util::num::divide_integers};
///
/// assert_eq!(divide_integers(10, 2), Some(Number::Integer(5)));
/// assert_eq!(divide_integers(1, 4), Some(Number::Real(0.25)));
/// assert_eq!(divide_integers(1, 0), None);
/// ```
#[must_use]
pub fn divide_integers(dividend: i64, divisor: i64) -> Option<Number> {
    if divisor == 0 {
        return None;
    }
    // `i64::MIN / -1` overflows; its exact value only exists as a real.
    match (dividend.checked_rem(divisor), dividend.checked_div(divisor)) {
        (Some(0), Some(quotient)) => Some(Number::Integer(quotient)),
        _ => Some(Number::Real(i64_to_f64_lossy(dividend) / i64_to_f64_lossy(divisor))),
    }
}
