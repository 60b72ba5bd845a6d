use std::error::Error;
use std::fmt;
use std::num::ParseIntError;

/// Rejected colour dialog submission. Carries the text as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    InvalidColorInput {
        input: String,
        source: ParseIntError,
    },
    /// Also covers a count of zero, reported through the `Zero` parse kind.
    InvalidIterationInput {
        input: String,
        source: ParseIntError,
    },
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorInput { input, .. } => {
                write!(f, "invalid colour '{}': expected a hexadecimal RGBA value", input)
            }
            Self::InvalidIterationInput { input, .. } => {
                write!(
                    f,
                    "invalid iteration count '{}': expected a whole number of at least 1",
                    input
                )
            }
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidColorInput { source, .. } => Some(source),
            Self::InvalidIterationInput { source, .. } => Some(source),
        }
    }
}
