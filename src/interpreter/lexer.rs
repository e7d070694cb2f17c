use std::iter::FusedIterator;

use logos::Logos;
use tracing::trace;

use crate::{
    interpreter::{symbols::Symbols, value::core::Number},
    util::num::parse_number_literal,
};

/// Raw lexical classes recognized in the input.
///
/// This is the character-level classification only. Values, identifier
/// resolution and positions are attached by [`Lexer`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
// Unicode white space, so a no-break space separates tokens too. Digits
// stay ASCII.
#[logos(skip r"\s+")]
pub enum Lexeme {
    /// Digits with an optional decimal comma, such as `12`, `1,23` or `12,`.
    #[regex(r"[0-9]+(,[0-9]*)?")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A run of ASCII letters, resolved against the symbol table.
    #[regex(r"[A-Za-z]+")]
    Identifier,
}

/// Arithmetic operators as they appear in tokens and postfix programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`, binary subtraction or a pending unary minus.
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// Unary negation applied after a parenthesized sub-expression.
    Neg,
}

impl Operator {
    /// `+` and `-`: the lower precedence level.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// `*` and `/`: the higher precedence level.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Neg => "NEG",
        };
        write!(f, "{symbol}")
    }
}

/// The kind of a token, carrying its value where it has one.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A literal or a resolved constant.
    Number(Number),
    /// An arithmetic operator.
    Op(Operator),
    /// `(`
    POpen,
    /// `)`
    PClose,
    /// An identifier that names neither a constant nor a keyword.
    Identifier(String),
    /// An identifier found in the keyword table, upper-cased.
    Keyword(String),
    /// End of a closed sub-expression inside a postfix program.
    Nop,
    /// End of input.
    Eof,
    /// A character outside every lexical class.
    Mismatch(String),
}

impl std::fmt::Display for TokenKind {
    /// Writes the token's value as shown in error messages.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Op(op) => write!(f, "{op}"),
            Self::POpen => write!(f, "("),
            Self::PClose => write!(f, ")"),
            Self::Identifier(text) | Self::Keyword(text) | Self::Mismatch(text) => {
                write!(f, "{text}")
            },
            Self::Nop => write!(f, "NOP"),
            Self::Eof => write!(f, "FIN"),
        }
    }
}

/// A token with the character offset of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// Zero-based character offset in the input line.
    pub position: usize,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// Lazily turns an input line into [`Token`]s.
///
/// Whitespace produces nothing, identifiers are resolved against the injected
/// [`Symbols`], and the sequence always ends with exactly one
/// [`TokenKind::Eof`] positioned at the input length in characters.
///
/// # Example
/// ```
/// use virgule::interpreter::{
///     lexer::{Lexer, Operator, TokenKind},
///     symbols::Symbols,
///     value::core::Number,
/// };
///
/// let kinds: Vec<TokenKind> = Lexer::new("1,5 * pi", Symbols::STANDARD).map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Number(Number::Real(1.5)),
///                 TokenKind::Op(Operator::Mul),
///                 TokenKind::Number(Number::Real(std::f64::consts::PI)),
///                 TokenKind::Eof]);
/// ```
pub struct Lexer<'src, 'sym> {
    inner:       logos::Lexer<'src, Lexeme>,
    symbols:     Symbols<'sym>,
    byte_cursor: usize,
    char_cursor: usize,
    finished:    bool,
}

impl<'src, 'sym> Lexer<'src, 'sym> {
    #[must_use]
    pub fn new(source: &'src str, symbols: Symbols<'sym>) -> Self {
        Self { inner: Lexeme::lexer(source),
               symbols,
               byte_cursor: 0,
               char_cursor: 0,
               finished: false }
    }

    /// Converts a byte offset into a character offset.
    ///
    /// Offsets must be requested in increasing order; each call only counts
    /// the characters since the previous one.
    fn char_offset(&mut self, byte: usize) -> usize {
        let source = self.inner.source();
        self.char_cursor += source[self.byte_cursor..byte].chars().count();
        self.byte_cursor = byte;
        self.char_cursor
    }
}

impl Iterator for Lexer<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let Some(lexeme) = self.inner.next() else {
            self.finished = true;
            let end = self.char_offset(self.inner.source().len());
            trace!(position = end, "lexed end of input");
            return Some(Token::new(TokenKind::Eof, end));
        };

        let position = self.char_offset(self.inner.span().start);
        let text = self.inner.slice();

        let kind = match lexeme {
            Ok(Lexeme::Number) => parse_number_literal(text)
                .map_or_else(|| TokenKind::Mismatch(text.to_string()), TokenKind::Number),
            Ok(Lexeme::Plus) => TokenKind::Op(Operator::Add),
            Ok(Lexeme::Minus) => TokenKind::Op(Operator::Sub),
            Ok(Lexeme::Star) => TokenKind::Op(Operator::Mul),
            Ok(Lexeme::Slash) => TokenKind::Op(Operator::Div),
            Ok(Lexeme::LParen) => TokenKind::POpen,
            Ok(Lexeme::RParen) => TokenKind::PClose,
            Ok(Lexeme::Identifier) => self.symbols.resolve(text),
            Err(()) => TokenKind::Mismatch(text.to_string()),
        };

        trace!(position, token = %kind, "lexed token");
        Some(Token::new(kind, position))
    }
}

impl FusedIterator for Lexer<'_, '_> {}
