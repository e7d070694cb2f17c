#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while folding a postfix program.
///
/// Runtime errors carry no position: they are detected after parsing, when
/// the link back to the source text is no longer tracked.
pub enum RuntimeError {
    /// Attempted division by zero, integral or real.
    DivisionByZero,
    /// The program left the operand stack empty or with extra values.
    ///
    /// Only reachable when a program was built by hand; the parser never
    /// produces one.
    MalformedProgram {
        /// Number of values left on the operand stack.
        remaining: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division par zero"),
            Self::MalformedProgram { remaining } => {
                write!(f, "programme postfixé invalide ({remaining} valeurs restantes)")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
