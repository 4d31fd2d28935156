//! Grading errors.

use harvest_core::DomainError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GradeError {
    /// Weight below the 1g minimum.
    #[error("invalid weight: {grams}g (must be at least 1g)")]
    InvalidWeight { grams: u32 },

    /// Text that is not one of the canonical grade labels.
    #[error("unknown grade label: {0:?}")]
    UnknownLabel(String),
}

impl From<GradeError> for DomainError {
    fn from(err: GradeError) -> Self {
        DomainError::validation(err.to_string())
    }
}
