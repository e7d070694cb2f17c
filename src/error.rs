/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// input line. Parse errors include unknown characters, tokens out of place,
/// and unbalanced parentheses. Each one is positioned.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while folding a postfix
/// program: division by zero and malformed programs.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced by a single evaluation.
///
/// Keeps the parse and runtime kinds apart so callers can tell a positioned
/// syntax fault from a failure detected while computing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input was rejected by the lexer or the parser.
    Parse(ParseError),
    /// The postfix program failed while being folded.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the character offset of the fault, for positioned errors.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => Some(e.position()),
            Self::Runtime(_) => None,
        }
    }

    /// Renders the error the way the interactive prompt shows it.
    ///
    /// Positioned errors get a caret line: `prompt_width + position` spaces
    /// then `^`, followed by `Erreur: <message>`. Runtime errors are a single
    /// `Erreur : <message>` line.
    ///
    /// # Example
    /// ```
    /// use virgule::evaluate;
    ///
    /// let err = evaluate("1+#").unwrap_err();
    /// assert_eq!(err.render(3), "     ^\nErreur: entrée inconnue #");
    ///
    /// let err = evaluate("1/0").unwrap_err();
    /// assert_eq!(err.render(3), "Erreur : division par zero");
    /// ```
    #[must_use]
    pub fn render(&self, prompt_width: usize) -> String {
        match self {
            Self::Parse(e) => {
                let padding = " ".repeat(prompt_width + e.position());
                format!("{padding}^\nErreur: {e}")
            },
            Self::Runtime(e) => format!("Erreur : {e}"),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
