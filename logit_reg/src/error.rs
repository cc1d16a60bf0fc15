use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire logistic regression module.
pub type Result<T> = std::result::Result<T, LogitErr>;

/// Coarse classification of a `LogitErr`, for callers that only care about
/// whether they passed bad data or called an operation at the wrong time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
}

/// The logistic regression module's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum LogitErr {
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    InvalidLabel {
        index: usize,
        value: f64,
    },
    EmptyDataset,
    InvalidSize,
    InvalidConfig(String),
    NotLoaded,
}

impl LogitErr {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LogitErr::NotLoaded => ErrorKind::InvalidState,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl Display for LogitErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogitErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch for {what}, got {got} and expected {expected}"
            ),
            LogitErr::InvalidLabel { index, value } => {
                write!(f, "The label at sample {index} is {value}, expected 0 or 1")
            }
            LogitErr::EmptyDataset => write!(f, "The dataset has no samples"),
            LogitErr::InvalidSize => write!(f, "The input size must be positive"),
            LogitErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            LogitErr::NotLoaded => {
                write!(f, "No dataset is loaded, call `load` before this operation")
            }
        }
    }
}

impl Error for LogitErr {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_not_loaded_is_a_state_error() {
        assert_eq!(LogitErr::NotLoaded.kind(), ErrorKind::InvalidState);
        assert_eq!(LogitErr::EmptyDataset.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            LogitErr::SizeMismatch {
                what: "labels",
                got: 3,
                expected: 2
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn display_carries_context() {
        let err = LogitErr::InvalidLabel {
            index: 4,
            value: 0.5,
        };
        assert_eq!(
            err.to_string(),
            "The label at sample 4 is 0.5, expected 0 or 1"
        );
    }
}
