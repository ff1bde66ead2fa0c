/// Recognition errors.
///
/// Defines all error types that can occur while recognizing forms in the
/// source text. Parse errors include unrecognized forms and lists whose
/// closing delimiter is never found.
pub mod parse_error;
/// Reduction errors.
///
/// Contains all error types that can be raised while reducing arithmetic
/// forms, such as wrong argument counts, non-numeric operands, or the
/// zero-product consistency check.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Represents any fatal error surfaced by one evaluation.
///
/// Argument lists are reduced while they are parsed, so a single run can
/// fail on either side. This enum carries both kinds and keeps the failure
/// offset reachable without matching on the side first.
pub enum Error {
    /// A form could not be recognized, or a list was left unterminated.
    Parse(ParseError),
    /// An arithmetic form could not be reduced.
    Runtime(RuntimeError),
}

impl Error {
    /// The byte offset at which the failure was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Parse(e) => e.offset(),
            Self::Runtime(e) => e.offset(),
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
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
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
