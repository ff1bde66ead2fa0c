use crate::interpreter::evaluator::Op;

#[derive(Debug)]
/// Represents all errors that can occur while reducing arithmetic forms.
pub enum RuntimeError {
    /// A variadic form (`+` or `*`) was applied to an empty argument list.
    TooFewArguments {
        /// The operator of the form.
        op:     Op,
        /// The byte offset of the operator.
        offset: usize,
    },
    /// A two-argument form (`-` or `/`) received a different argument count.
    ArgumentCountMismatch {
        /// The operator of the form.
        op:       Op,
        /// The number of arguments the operator requires.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The byte offset of the operator.
        offset:   usize,
    },
    /// A real multiplication accumulated a product of exactly zero.
    ZeroProduct {
        /// The byte offset of the `*` operator.
        offset: usize,
    },
    /// A numeric value was expected, but a list was found.
    ExpectedNumber {
        /// The byte offset of the operator whose argument was not numeric.
        offset: usize,
    },
}

impl RuntimeError {
    /// The byte offset at which the failure was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::TooFewArguments { offset, .. }
            | Self::ArgumentCountMismatch { offset, .. }
            | Self::ZeroProduct { offset }
            | Self::ExpectedNumber { offset } => *offset,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewArguments { op, offset } => write!(f,
                                                           "Error at offset {offset}: Expected at least one argument to '{op}'."),

            Self::ArgumentCountMismatch { op,
                                          expected,
                                          found,
                                          offset, } => write!(f,
                                                              "Error at offset {offset}: Expected {expected} arguments to '{op}', found {found}."),

            Self::ZeroProduct { offset } => write!(f,
                                                   "Error at offset {offset}: Product of real factors is exactly zero."),

            Self::ExpectedNumber { offset } => {
                write!(f, "Error at offset {offset}: Expected number.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
