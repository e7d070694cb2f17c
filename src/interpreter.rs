/// The evaluator module folds postfix programs into numbers.
///
/// The evaluator walks a finished program once with an operand stack,
/// performing integer and real arithmetic and reporting division by zero.
///
/// # Responsibilities
/// - Applies `+ - * /` and unary negation in postfix order.
/// - Promotes integers to reals when an operand is real or a result leaves
///   the `i64` range.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes an input line for the parser.
///
/// The lexer reads the raw text and lazily produces tokens for numbers,
/// operators, parentheses and identifiers, each with the character offset
/// where it starts.
///
/// # Responsibilities
/// - Classifies characters into lexemes with `logos`.
/// - Resolves identifiers into constants or keywords.
/// - Turns unknown characters into mismatch tokens instead of failing.
pub mod lexer;
/// The parser module turns tokens into a postfix program.
///
/// The parser reorders tokens while it reads them: a swap puts each binary
/// operator after its right operand, and a rotation keeps `* /` ahead of
/// `+ -`. No syntax tree is built.
///
/// # Responsibilities
/// - Validates the token sequence and reports positioned syntax errors.
/// - Folds unary minus into literals or into a `Neg` operator.
/// - Tracks parenthesis nesting on an explicit context stack.
pub mod parser;
/// Constant and keyword tables consulted by the lexer.
pub mod symbols;
/// The value module defines the numbers the evaluator computes with.
pub mod value;
