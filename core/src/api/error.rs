//! Public error types for the seqkit API.
//!
//! Every failure of the dynamic layer, and the one failure of the typed layer
//! (`reduce` over an empty slice), is reported as an [`Error`]. Errors raised
//! by a callback travel through the operations untouched.

use crate::parser::ParseError;
use crate::values::{TypeError, binder};
use crate::{String, Vec};

/// Public error type for all seqkit operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The operation was invoked without a usable sequence: the receiver was
    /// missing, `null`/`undefined`, or not an array.
    #[error("{operation} called on {found}")]
    InvalidReceiver {
        operation: &'static str,
        found: &'static str,
    },

    /// The callback argument is not a function. Raised before any element
    /// is visited.
    #[error("{found} is not a function")]
    NotCallable {
        operation: &'static str,
        found: &'static str,
    },

    /// `reduce` found no element to seed the accumulator with.
    #[error("Reduce of empty array with no initial value")]
    EmptyReduceNoSeed,

    /// A function was called with too few or too many arguments.
    #[error("{operation} expects {expected} argument(s), got {got}")]
    ArgumentCount {
        operation: &'static str,
        expected: &'static str,
        got: usize,
    },

    /// An optional argument (index, depth, separator) has the wrong kind.
    #[error("{operation}: invalid {argument}: {source}")]
    InvalidArgument {
        operation: &'static str,
        argument: &'static str,
        source: TypeError,
    },

    /// A dotted name did not resolve to a function in the environment.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("{0}")]
    Binding(#[from] binder::Error),

    /// A literal could not be parsed.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// An error raised by a callback itself.
    #[error("uncaught error: {0}")]
    Thrown(String),
}

impl Error {
    /// Stable error code, e.g. for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidReceiver { .. } => "E001",
            Error::NotCallable { .. } => "E002",
            Error::EmptyReduceNoSeed => "E003",
            Error::ArgumentCount { .. } => "E004",
            Error::InvalidArgument { .. } => "E005",
            Error::UnknownFunction(_) => "E006",
            Error::Binding(_) => "E007",
            Error::Parse(_) => "E008",
            Error::Thrown(_) => "E009",
        }
    }

    /// Help messages suggesting how to fix the issue.
    pub fn help(&self) -> Vec<String> {
        use crate::ToString;
        match self {
            Error::InvalidReceiver { .. } => {
                Vec::from(["pass an array as the first argument".to_string()])
            }
            Error::NotCallable { .. } => {
                Vec::from(["pass a function value as the callback argument".to_string()])
            }
            Error::EmptyReduceNoSeed => {
                Vec::from(["supply an initial value as the third argument".to_string()])
            }
            _ => Vec::new(),
        }
    }
}
