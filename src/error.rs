use std::fmt;

use crate::ast::Slice;

/// Lexing errors.
///
/// Raised by the tokenizer for illegal characters, misplaced decimal points,
/// malformed number literals and operator runs that match no known operator.
pub mod lex_error;
/// Parsing errors.
///
/// Raised by the tree builder when a token shows up where the tree under
/// construction cannot accept it, or when the input ends with an unclosed
/// group, call or operator.
pub mod parse_error;
/// Evaluation errors.
///
/// Raised while evaluating a finished tree: unknown variables and functions,
/// argument count mismatches, and nodes carrying an operator they cannot apply.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error raised while turning source text into a value.
///
/// Each phase fails with its own error type; this enum is what the top-level
/// helpers such as [`crate::evaluate`] return.
pub enum Error {
    /// The source text could not be tokenized.
    Lex(LexError),
    /// The tokens do not form a valid expression.
    Parse(ParseError),
    /// The tree could not be evaluated against the environment.
    Eval(EvalError),
}

impl Error {
    /// The source span the error points at.
    ///
    /// Errors raised on the synthetic root, such as evaluating empty input,
    /// carry [`Slice::SENTINEL`].
    #[must_use]
    pub const fn slice(&self) -> Slice {
        match self {
            Self::Lex(e) => e.slice(),
            Self::Parse(e) => e.slice(),
            Self::Eval(e) => e.slice(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<EvalError> for Error {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}
