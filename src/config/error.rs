//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("top_n must be at least 1")]
    InvalidTopN,

    #[error("relevance_floor must be at most 100")]
    InvalidRelevanceFloor,

    #[error("max_matching_factors must be at least 1")]
    InvalidFactorCap,

    #[error("at least one field weight must be positive")]
    AllWeightsZero,

    #[error("clarify_threshold must be below recommend_threshold")]
    ThresholdsOutOfOrder,

    #[error("recommend_threshold must be at most 100")]
    ThresholdTooHigh,

    #[error("max_questions must be at least 1")]
    InvalidQuestionCap,
}
