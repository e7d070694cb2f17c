/// The numeric value produced by literals, constants and every operator.
///
/// Defines `Number`, a tagged integer-or-real value. Integers stay integral
/// through `+ - *` and exact division; anything else promotes to a real.
pub mod core;
