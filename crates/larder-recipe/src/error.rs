//! Reasons a recipe source or one of its lines is skipped

use thiserror::Error;

/// Why a whole recipe source was skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    #[error("failed to read source: {0}")]
    Io(String),

    #[error("expected at least 3 lines, found {0}")]
    TooFewLines(usize),

    #[error("recipe name cannot be empty")]
    EmptyName,

    #[error("success rate '{0}' is not a number")]
    InvalidSuccessRate(String),

    #[error("success rate {0} must be between 0 and 1")]
    SuccessRateOutOfRange(f64),
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::Io(e.to_string())
    }
}

/// Why a single ingredient line was skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    #[error("expected '<ingredient> <quantity>', found {0} tokens")]
    TokenCount(usize),

    #[error("quantity '{0}' is not a non-negative integer")]
    InvalidQuantity(String),

    #[error("quantity must be greater than zero")]
    ZeroQuantity,
}
