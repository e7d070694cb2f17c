use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Operator, Token, TokenKind},
        parser::{program::Program, reduction::ReductionBuffer, state::ParseState},
        value::core::Number,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token sequence into a postfix program in a single pass.
///
/// Tokens are consumed exactly once, left to right. The sequence should end
/// with [`TokenKind::Eof`]; tokens after it are not read. A sequence that runs
/// out without one is treated as ending right after its last token.
///
/// # Errors
/// - `UnknownCharacter` for a mismatched character, in any state.
/// - `Syntax` for a token that cannot follow the current state, for a `)`
///   without a matching `(`, and for an input that ends mid-expression.
/// - `UnbalancedParenthesis` when the input ends with a `(` still open.
///
/// # Example
/// ```
/// use virgule::interpreter::{lexer::Lexer, parser::parse, symbols::Symbols};
///
/// let program = parse(Lexer::new("-(1+2)*3", Symbols::STANDARD)).unwrap();
/// assert_eq!(program.to_string(), "1 2 + NOP NEG 3 *");
/// ```
pub fn parse<I>(tokens: I) -> ParseResult<Program>
    where I: IntoIterator<Item = Token>
{
    let mut parser = Parser::new();
    let mut end = 0;

    for token in tokens {
        end = token.position + 1;
        if let TokenKind::Eof = token.kind {
            return parser.finish(token.position);
        }
        parser.step(token)?;
    }

    parser.finish(end)
}

/// The parse state machine for one input.
///
/// `buffer` is the reduction buffer of the innermost open level; each `(`
/// saves the enclosing buffer and state on `contexts`.
struct Parser {
    buffer:   ReductionBuffer,
    state:    ParseState,
    contexts: Vec<(ReductionBuffer, ParseState)>,
}

impl Parser {
    const fn new() -> Self {
        Self { buffer:   ReductionBuffer::new(),
               state:    ParseState::Expr,
               contexts: Vec::new(), }
    }

    fn step(&mut self, token: Token) -> ParseResult<()> {
        trace!(state = ?self.state,
               depth = self.contexts.len(),
               token = %token.kind,
               position = token.position,
               "parser step");

        match &token.kind {
            TokenKind::Mismatch(character) => {
                Err(ParseError::UnknownCharacter { character: character.clone(),
                                                   position:  token.position, })
            },
            TokenKind::Number(value) => self.number(*value, &token),
            TokenKind::Op(op) => self.operator(*op, token),
            TokenKind::POpen => self.open(&token),
            TokenKind::PClose => self.close(&token),
            TokenKind::Identifier(_) | TokenKind::Keyword(_) | TokenKind::Nop | TokenKind::Eof => {
                Err(self.unexpected(&token))
            },
        }
    }

    fn number(&mut self, value: Number, token: &Token) -> ParseResult<()> {
        match self.state {
            ParseState::Expr => self.buffer.push(token.clone()),
            ParseState::NegExpr => {
                let position = self.buffer.take_marker();
                self.buffer.push(Self::negated(value, position));
            },
            ParseState::Operand => self.buffer.push_operand(token.clone()),
            ParseState::NegOperand => {
                let position = self.buffer.take_marker();
                self.buffer.push_operand(Self::negated(value, position));
            },
            ParseState::Operation => return Err(self.unexpected(token)),
        }

        self.state = ParseState::Operation;
        Ok(())
    }

    fn operator(&mut self, op: Operator, token: Token) -> ParseResult<()> {
        self.state = match (self.state, op) {
            (ParseState::Operation, _) => ParseState::Operand,
            (state, Operator::Sub) => match state.negated() {
                Some(next) => next,
                None => return Err(self.unexpected(&token)),
            },
            _ => return Err(self.unexpected(&token)),
        };

        self.buffer.push(token);
        Ok(())
    }

    fn open(&mut self, token: &Token) -> ParseResult<()> {
        match self.state {
            ParseState::Expr | ParseState::Operand => {},
            ParseState::NegExpr => {
                let position = self.buffer.take_marker();
                self.buffer.push(Token::new(TokenKind::Op(Operator::Neg), position));
            },
            ParseState::Operation | ParseState::NegOperand => return Err(self.unexpected(token)),
        }

        let outer = std::mem::take(&mut self.buffer);
        self.contexts.push((outer, self.state));
        self.state = ParseState::Expr;
        Ok(())
    }

    fn close(&mut self, token: &Token) -> ParseResult<()> {
        if self.state != ParseState::Operation {
            return Err(self.unexpected(token));
        }
        let Some((mut outer, outer_state)) = self.contexts.pop() else {
            return Err(self.unexpected(token));
        };

        let mut group = std::mem::take(&mut self.buffer);
        group.push(Token::new(TokenKind::Nop, token.position));

        match outer_state {
            ParseState::Expr => outer.append(group),
            ParseState::NegExpr => outer.splice_negated(group),
            ParseState::Operand => outer.splice_operand(group),
            ParseState::Operation | ParseState::NegOperand => {
                return Err(ParseError::Syntax { expected: outer_state.expected(),
                                                found:    token.kind.to_string(),
                                                position: token.position, });
            },
        }

        self.buffer = outer;
        self.state = ParseState::Operation;
        Ok(())
    }

    fn finish(self, position: usize) -> ParseResult<Program> {
        if self.state != ParseState::Operation {
            return Err(ParseError::Syntax { expected: self.state.expected(),
                                            found: TokenKind::Eof.to_string(),
                                            position });
        }
        if !self.contexts.is_empty() {
            return Err(ParseError::UnbalancedParenthesis { position });
        }

        Ok(self.buffer.into_program())
    }

    fn unexpected(&self, token: &Token) -> ParseError {
        ParseError::Syntax { expected: self.state.expected(),
                             found:    token.kind.to_string(),
                             position: token.position, }
    }

    /// A number token carrying `-value`, placed where the minus sign was.
    fn negated(value: Number, position: usize) -> Token {
        Token::new(TokenKind::Number(-value), position)
    }
}
