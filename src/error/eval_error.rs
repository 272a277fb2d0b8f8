use crate::ast::{Operator, Slice};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a tree.
pub enum EvalError {
    /// The environment has no variable with this name.
    UnknownVariable {
        /// The name of the variable.
        name:  String,
        /// Where the variable is referenced.
        slice: Slice,
    },
    /// The environment has no function with this name.
    UnknownFunction {
        /// The name of the function.
        name:  String,
        /// Where the call starts.
        slice: Slice,
    },
    /// A call supplied a different number of arguments than the function
    /// declares.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The declared parameter count.
        expected: usize,
        /// The number of arguments in the call.
        found:    usize,
        /// Where the call starts.
        slice:    Slice,
    },
    /// A node carries an operator it cannot apply, such as `!` used as an
    /// infix operator.
    InvalidOperator {
        /// The operator.
        operator: Operator,
        /// Description of the node.
        node:     String,
        /// Where the operator sits in the source.
        slice:    Slice,
    },
    /// A node holds a different number of children than its variant needs.
    ChildCountMismatch {
        /// Description of the node.
        node:     String,
        /// The number of children the node needs.
        expected: usize,
        /// The number of children the node holds.
        found:    usize,
        /// Where the node sits in the source.
        slice:    Slice,
    },
}

impl EvalError {
    /// The source span the error points at.
    #[must_use]
    pub const fn slice(&self) -> Slice {
        match self {
            Self::UnknownVariable { slice, .. }
            | Self::UnknownFunction { slice, .. }
            | Self::ArgumentCountMismatch { slice, .. }
            | Self::InvalidOperator { slice, .. }
            | Self::ChildCountMismatch { slice, .. } => *slice,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, slice } => {
                write!(f, "Error at {slice}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, slice } => {
                write!(f, "Error at {slice}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          slice, } => write!(f,
                                                             "Error at {slice}: Function '{name}' takes {expected} argument(s) but {found} were supplied."),
            Self::InvalidOperator { operator, node, slice } => {
                write!(f, "Error at {slice}: {operator} cannot be applied by {node}.")
            },
            Self::ChildCountMismatch { node,
                                       expected,
                                       found,
                                       slice, } => write!(f,
                                                          "Error at {slice}: {node} needs {expected} operand(s) but holds {found}."),
        }
    }
}

impl std::error::Error for EvalError {}
