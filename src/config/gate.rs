//! Confidence gate configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Named thresholds for the confidence gate.
///
/// A profile's confidence is compared against these to decide whether
/// to recommend, recommend with clarifying questions, or only ask for
/// more information.
#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    /// Confidence at or above this recommends with no caveats.
    #[serde(default = "default_recommend_threshold")]
    pub recommend_threshold: u8,

    /// Confidence at or above this (but below `recommend_threshold`)
    /// recommends and asks clarifying questions; below it, only asks.
    #[serde(default = "default_clarify_threshold")]
    pub clarify_threshold: u8,

    /// Maximum number of clarifying questions per turn.
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,
}

fn default_recommend_threshold() -> u8 {
    70
}

fn default_clarify_threshold() -> u8 {
    50
}

fn default_max_questions() -> usize {
    3
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            recommend_threshold: default_recommend_threshold(),
            clarify_threshold: default_clarify_threshold(),
            max_questions: default_max_questions(),
        }
    }
}

impl GateConfig {
    /// Validate gate configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.recommend_threshold > 100 {
            return Err(ValidationError::ThresholdTooHigh);
        }
        if self.clarify_threshold >= self.recommend_threshold {
            return Err(ValidationError::ThresholdsOutOfOrder);
        }
        if self.max_questions == 0 {
            return Err(ValidationError::InvalidQuestionCap);
        }
        Ok(())
    }
}
