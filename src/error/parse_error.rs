use crate::ast::Slice;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building the syntax tree.
pub enum ParseError {
    /// A token arrived where the tree under construction cannot take it.
    UnexpectedToken {
        /// The token text.
        token: String,
        /// Where the token sits in the source.
        slice: Slice,
    },
    /// The input ended while a node was still waiting for children or for its
    /// closing parenthesis.
    Incomplete {
        /// Description of the first unfinished node found.
        node:  String,
        /// Where the node starts in the source.
        slice: Slice,
    },
}

impl ParseError {
    /// The source span the error points at.
    #[must_use]
    pub const fn slice(&self) -> Slice {
        match self {
            Self::UnexpectedToken { slice, .. } | Self::Incomplete { slice, .. } => *slice,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, slice } => {
                write!(f, "Error at {slice}: Unexpected token: {token}.")
            },
            Self::Incomplete { node, slice } => {
                write!(f, "Error at {slice}: {node} is not completed.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
