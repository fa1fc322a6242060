use thiserror::Error;

/// Errors raised by the box algebra.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Incompatible dimensions at index {index}: expected {expected}, found {found}")]
    IncompatibleDimensions {
        index: usize,
        expected: usize,
        found: usize,
    },
}
