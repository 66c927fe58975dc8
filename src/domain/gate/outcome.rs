//! Gate outcome - the three terminal results of an evaluation.

use serde::{Deserialize, Serialize};

use crate::domain::matching::CareerRecommendation;

/// Terminal outcome of evaluating one profile.
///
/// A tagged variant rather than an if/else chain in presentation code,
/// so the branching policy is testable in isolation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GateOutcome {
    /// Confidence was high enough to recommend with no caveats.
    Recommend {
        recommendations: Vec<CareerRecommendation>,
    },
    /// Confidence was middling: recommendations plus clarifying
    /// questions that would sharpen a follow-up turn.
    RecommendWithQuestions {
        recommendations: Vec<CareerRecommendation>,
        questions: Vec<String>,
    },
    /// Confidence was too low to rank at all; only questions.
    RequestMoreInfo { questions: Vec<String> },
}

impl GateOutcome {
    /// Returns the recommendations, empty for `RequestMoreInfo`.
    pub fn recommendations(&self) -> &[CareerRecommendation] {
        match self {
            GateOutcome::Recommend { recommendations }
            | GateOutcome::RecommendWithQuestions { recommendations, .. } => recommendations,
            GateOutcome::RequestMoreInfo { .. } => &[],
        }
    }

    /// Returns the clarifying questions, empty for `Recommend`.
    pub fn questions(&self) -> &[String] {
        match self {
            GateOutcome::Recommend { .. } => &[],
            GateOutcome::RecommendWithQuestions { questions, .. }
            | GateOutcome::RequestMoreInfo { questions } => questions,
        }
    }

    /// Returns true if the caller should gather more input first.
    pub fn needs_more_info(&self) -> bool {
        matches!(self, GateOutcome::RequestMoreInfo { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_more_info_has_no_recommendations() {
        let outcome = GateOutcome::RequestMoreInfo {
            questions: vec!["What do you enjoy?".into()],
        };
        assert!(outcome.recommendations().is_empty());
        assert_eq!(outcome.questions().len(), 1);
        assert!(outcome.needs_more_info());
    }

    #[test]
    fn recommend_has_no_questions() {
        let outcome = GateOutcome::Recommend {
            recommendations: vec![],
        };
        assert!(outcome.questions().is_empty());
        assert!(!outcome.needs_more_info());
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let outcome = GateOutcome::RequestMoreInfo {
            questions: vec!["Q1".into()],
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"status\":\"request_more_info\""));
    }
}
