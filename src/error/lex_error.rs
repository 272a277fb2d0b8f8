use crate::ast::Slice;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing.
pub enum LexError {
    /// A character that cannot start or continue any token.
    InvalidCharacter {
        /// The offending character.
        ch:  char,
        /// Its character offset in the source.
        pos: usize,
    },
    /// A `.` outside the integer part of a number literal.
    MisplacedDecimalPoint {
        /// Character offset of the `.`.
        pos: usize,
    },
    /// A digit run that does not parse as a number.
    InvalidNumber {
        /// The literal text.
        literal: String,
        /// Where the literal sits in the source.
        slice:   Slice,
    },
    /// A run of operator characters that is not exactly a known operator.
    UnknownOperator {
        /// The text of the run.
        symbol: String,
        /// Where the run sits in the source.
        slice:  Slice,
    },
}

impl LexError {
    /// The source span the error points at.
    #[must_use]
    pub const fn slice(&self) -> Slice {
        match self {
            Self::InvalidCharacter { pos, .. } | Self::MisplacedDecimalPoint { pos } => {
                Slice::point(*pos)
            },
            Self::InvalidNumber { slice, .. } | Self::UnknownOperator { slice, .. } => *slice,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { ch, pos } => {
                write!(f, "Error at [{pos}]: '{ch}' is not a valid character.")
            },
            Self::MisplacedDecimalPoint { pos } => write!(f,
                                                          "Error at [{pos}]: '.' may only appear as the decimal point of a number."),
            Self::InvalidNumber { literal, slice } => {
                write!(f, "Error at {slice}: '{literal}' is not a valid number.")
            },
            Self::UnknownOperator { symbol, slice } => {
                write!(f, "Error at {slice}: '{symbol}' is not a valid operator.")
            },
        }
    }
}

impl std::error::Error for LexError {}
