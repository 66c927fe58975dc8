//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Duplicate value for '{field}': {value}")]
    Duplicate { field: String, value: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a duplicate value validation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors the matching engine can report to its caller.
///
/// All variants are local validation failures detected before any
/// scoring work begins; the engine never partially scores and then
/// fails. A ranking that clears no entry past the relevance floor is
/// an empty `Ok` result, not an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The profile violates its structural contract.
    #[error("Invalid preference profile: {reason}")]
    InvalidProfile { reason: String },

    /// Ranking was attempted against a catalog with zero entries.
    #[error("Career catalog contains no entries")]
    EmptyCatalog,

    /// The extractor reported a confidence score outside [0, 100].
    #[error("Confidence score {actual} is outside the 0-100 range")]
    InvalidConfidence { actual: u8 },
}

impl EngineError {
    /// Creates an invalid profile error.
    pub fn invalid_profile(reason: impl Into<String>) -> Self {
        EngineError::InvalidProfile { reason: reason.into() }
    }
}
