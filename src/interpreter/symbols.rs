use std::f64::consts;

use crate::interpreter::{lexer::TokenKind, value::core::Number};

/// Named constants known to the standard table, by upper-cased name.
pub const CONSTANTS: &[(&str, Number)] =
    &[("PI", Number::Real(consts::PI)), ("E", Number::Real(consts::E))];

/// Keywords known to the standard table. None are defined yet.
pub const KEYWORDS: &[&str] = &[];

/// Read-only lookup tables used to resolve identifiers while lexing.
///
/// Lookups compare the upper-cased identifier against the table entries, so
/// `pi`, `Pi` and `PI` all name the same constant. Table entries must
/// therefore be written upper-case.
///
/// # Example
/// ```
/// use virgule::interpreter::{lexer::TokenKind, symbols::Symbols, value::core::Number};
///
/// let symbols = Symbols::new(&[("TWO", Number::Integer(2))], &["LET"]);
///
/// assert_eq!(symbols.resolve("two"), TokenKind::Number(Number::Integer(2)));
/// assert_eq!(symbols.resolve("let"), TokenKind::Keyword("LET".to_string()));
/// assert_eq!(symbols.resolve("x"), TokenKind::Identifier("x".to_string()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Symbols<'a> {
    constants: &'a [(&'a str, Number)],
    keywords:  &'a [&'a str],
}

impl Symbols<'static> {
    /// The standard table: `PI` and `E`, no keywords.
    pub const STANDARD: Self = Self::new(CONSTANTS, KEYWORDS);
}

impl<'a> Symbols<'a> {
    /// Builds a table from borrowed constant and keyword lists.
    #[must_use]
    pub const fn new(constants: &'a [(&'a str, Number)], keywords: &'a [&'a str]) -> Self {
        Self { constants, keywords }
    }

    /// Looks up a constant by name, ignoring case.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<Number> {
        self.constants
            .iter()
            .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }

    /// Returns `true` if `name` is a keyword, ignoring case.
    #[must_use]
    pub fn is_keyword(&self, name: &str) -> bool {
        self.keywords.iter().any(|entry| entry.eq_ignore_ascii_case(name))
    }

    /// Resolves an identifier lexeme into the token kind it stands for.
    ///
    /// Keywords win over constants, and anything else stays a plain
    /// identifier for the parser to reject.
    #[must_use]
    pub fn resolve(&self, identifier: &str) -> TokenKind {
        if self.is_keyword(identifier) {
            TokenKind::Keyword(identifier.to_ascii_uppercase())
        } else if let Some(value) = self.constant(identifier) {
            TokenKind::Number(value)
        } else {
            TokenKind::Identifier(identifier.to_string())
        }
    }
}
