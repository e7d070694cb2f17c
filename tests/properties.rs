//! Property-based tests for the parser and evaluator using proptest.
//!
//! These tests verify that:
//! 1. Randomly built expressions evaluate exactly like a direct
//!    precedence-climbing evaluation of the same tree.
//! 2. An unknown character inserted anywhere in a valid expression is
//!    reported at the offset where it was inserted.

use std::fmt;

use proptest::{prelude::*, sample::Index};
use virgule::{
    compile,
    error::{Error, ParseError},
    evaluate,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::Operator,
        symbols::Symbols,
        value::core::Number,
    },
};

#[derive(Debug, Clone)]
enum Operand {
    Integer(i64),
    Real { int: u32, frac: u32, negative: bool },
    Group { chain: Box<Chain>, negated: bool },
}

/// `first op operand op operand ...` at one nesting level.
#[derive(Debug, Clone)]
struct Chain {
    first: Operand,
    rest:  Vec<(Operator, Operand)>,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real { int, frac, negative } => {
                write!(f, "{}{int},{frac}", if *negative { "-" } else { "" })
            },
            Self::Group { chain, negated } => {
                write!(f, "{}({chain})", if *negated { "-" } else { "" })
            },
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for (op, operand) in &self.rest {
            write!(f, "{op}{operand}")?;
        }
        Ok(())
    }
}

impl Operand {
    fn value(&self) -> EvalResult<Number> {
        match self {
            Self::Integer(n) => Ok(Number::Integer(*n)),
            Self::Real { int, frac, negative } => {
                let text = format!("{}{int}.{frac}", if *negative { "-" } else { "" });
                Ok(Number::Real(text.parse().unwrap()))
            },
            Self::Group { chain, negated: false } => chain.value(),
            Self::Group { chain, negated: true } => chain.value().map(|value| -value),
        }
    }
}

impl Chain {
    /// Multiplies out each term left to right, then sums the terms left to
    /// right.
    fn value(&self) -> EvalResult<Number> {
        let mut terms = Vec::new();
        let mut sign = Operator::Add;
        let mut term = self.first.value()?;

        for (op, operand) in &self.rest {
            let value = operand.value()?;
            if op.is_multiplicative() {
                term = Evaluator::eval_binary(*op, term, value)?;
            } else {
                terms.push((sign, term));
                sign = *op;
                term = value;
            }
        }
        terms.push((sign, term));

        let mut terms = terms.into_iter();
        let (_, mut sum) = terms.next().unwrap();
        for (op, term) in terms {
            sum = Evaluator::eval_binary(op, sum, term)?;
        }
        Ok(sum)
    }
}

fn operator() -> impl Strategy<Value = Operator> {
    prop_oneof![Just(Operator::Add),
                Just(Operator::Sub),
                Just(Operator::Mul),
                Just(Operator::Div),]
}

fn literal() -> BoxedStrategy<Operand> {
    prop_oneof![(-9i64..=9).prop_map(Operand::Integer),
                (0u32..100, 0u32..100, any::<bool>()).prop_map(|(int, frac, negative)| {
                                                         Operand::Real { int,
                                                                         frac,
                                                                         negative }
                                                     }),].boxed()
}

/// Operands after a binary operator; a minus there only binds to a literal.
fn operand(depth: u32) -> BoxedStrategy<Operand> {
    if depth == 0 {
        return literal();
    }
    prop_oneof![3 => literal(),
                1 => chain(depth - 1).prop_map(|chain| Operand::Group { chain:   Box::new(chain),
                                                                        negated: false, }),].boxed()
}

/// The first operand of a level, which may also negate a whole group.
fn leading_operand(depth: u32) -> BoxedStrategy<Operand> {
    if depth == 0 {
        return literal();
    }
    prop_oneof![3 => literal(),
                1 => (chain(depth - 1), any::<bool>()).prop_map(|(chain, negated)| {
                                                          Operand::Group { chain: Box::new(chain),
                                                                           negated }
                                                      }),].boxed()
}

fn chain(depth: u32) -> BoxedStrategy<Chain> {
    (leading_operand(depth), prop::collection::vec((operator(), operand(depth)), 0..4))
        .prop_map(|(first, rest)| Chain { first, rest })
        .boxed()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn evaluation_follows_precedence(chain in chain(2)) {
        let src = chain.to_string();
        let expected = chain.value().map_err(Error::Runtime);

        prop_assert_eq!(evaluate(&src), expected, "evaluating `{}`", src);
    }

    #[test]
    fn compiled_programs_reduce_the_same_twice(chain in chain(2)) {
        let program = compile(&chain.to_string(), Symbols::STANDARD).unwrap();
        let mut evaluator = Evaluator::new();

        let first = evaluator.reduce(&program);
        prop_assert_eq!(evaluator.reduce(&program), first);
    }

    #[test]
    fn unknown_characters_point_at_themselves(
        chain in chain(2),
        at in any::<Index>(),
        bad in prop::sample::select(vec!['#', '$', '%', '?', '@', '!', 'é']),
    ) {
        let mut chars: Vec<char> = chain.to_string().chars().collect();
        let position = at.index(chars.len() + 1);
        chars.insert(position, bad);
        let src: String = chars.into_iter().collect();

        let expected = ParseError::UnknownCharacter { character: bad.to_string(), position };
        prop_assert_eq!(evaluate(&src), Err(Error::Parse(expected)), "evaluating `{}`", src);
    }
}
