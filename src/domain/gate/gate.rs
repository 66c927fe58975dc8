//! The confidence gate itself.

use crate::config::EngineConfig;
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{EngineError, Percentage};
use crate::domain::matching::RecommendationRanker;
use crate::domain::profile::PreferenceProfile;

use super::outcome::GateOutcome;
use super::questions::select_questions;

/// Routes a profile evaluation based on extractor confidence.
///
/// Holds no cross-turn state: re-evaluating after clarification
/// answers is a fresh, independent call with the new profile.
#[derive(Debug, Clone)]
pub struct ConfidenceGate {
    recommend_threshold: u8,
    clarify_threshold: u8,
    max_questions: usize,
    ranker: RecommendationRanker,
}

impl ConfidenceGate {
    /// Creates a gate (and its ranker) from engine configuration.
    ///
    /// Assumes the configuration has been validated.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            recommend_threshold: config.gate.recommend_threshold,
            clarify_threshold: config.gate.clarify_threshold,
            max_questions: config.gate.max_questions,
            ranker: RecommendationRanker::new(config.scoring.clone()),
        }
    }

    /// Evaluates one profile against the catalog.
    ///
    /// # Errors
    /// - `EngineError::InvalidConfidence` if the extractor reported a
    ///   confidence outside [0, 100], checked before any scoring.
    /// - `EngineError::EmptyCatalog` from ranking, on the two branches
    ///   that rank.
    pub fn evaluate(
        &self,
        profile: &PreferenceProfile,
        catalog: &Catalog,
    ) -> Result<GateOutcome, EngineError> {
        let confidence = Percentage::try_new(profile.confidence_score).map_err(|_| {
            EngineError::InvalidConfidence {
                actual: profile.confidence_score,
            }
        })?;

        let outcome = if confidence.value() >= self.recommend_threshold {
            GateOutcome::Recommend {
                recommendations: self.ranker.rank(profile, catalog)?,
            }
        } else if confidence.value() >= self.clarify_threshold {
            GateOutcome::RecommendWithQuestions {
                recommendations: self.ranker.rank(profile, catalog)?,
                questions: select_questions(profile, self.max_questions),
            }
        } else {
            GateOutcome::RequestMoreInfo {
                questions: select_questions(profile, self.max_questions),
            }
        };

        tracing::debug!(
            confidence = confidence.value(),
            needs_more_info = outcome.needs_more_info(),
            recommendations = outcome.recommendations().len(),
            "evaluated profile"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{builtin_catalog, CatalogEntry, CareerCategory};

    fn gate() -> ConfidenceGate {
        ConfidenceGate::new(&EngineConfig::default())
    }

    fn profile_with_confidence(confidence: u8) -> PreferenceProfile {
        PreferenceProfile::new(confidence)
            .with_skills(["mathematics", "programming"])
            .with_interests(["coding", "problem-solving"])
    }

    #[test]
    fn confidence_49_requests_more_info() {
        let outcome = gate()
            .evaluate(&profile_with_confidence(49), builtin_catalog())
            .unwrap();
        assert!(matches!(outcome, GateOutcome::RequestMoreInfo { .. }));
        assert!(outcome.recommendations().is_empty());
        assert!(!outcome.questions().is_empty());
    }

    #[test]
    fn confidence_50_recommends_with_questions() {
        let outcome = gate()
            .evaluate(&profile_with_confidence(50), builtin_catalog())
            .unwrap();
        assert!(matches!(outcome, GateOutcome::RecommendWithQuestions { .. }));
        assert!(!outcome.recommendations().is_empty());
        assert!(!outcome.questions().is_empty());
    }

    #[test]
    fn confidence_69_still_asks_questions() {
        let outcome = gate()
            .evaluate(&profile_with_confidence(69), builtin_catalog())
            .unwrap();
        assert!(matches!(outcome, GateOutcome::RecommendWithQuestions { .. }));
    }

    #[test]
    fn confidence_70_recommends_cleanly() {
        let outcome = gate()
            .evaluate(&profile_with_confidence(70), builtin_catalog())
            .unwrap();
        assert!(matches!(outcome, GateOutcome::Recommend { .. }));
        assert!(!outcome.recommendations().is_empty());
        assert!(outcome.questions().is_empty());
    }

    #[test]
    fn confidence_0_and_100_stay_inside_the_partition() {
        let low = gate()
            .evaluate(&profile_with_confidence(0), builtin_catalog())
            .unwrap();
        assert!(low.needs_more_info());

        let high = gate()
            .evaluate(&profile_with_confidence(100), builtin_catalog())
            .unwrap();
        assert!(matches!(high, GateOutcome::Recommend { .. }));
    }

    #[test]
    fn confidence_over_100_is_rejected_before_scoring() {
        let result = gate().evaluate(&profile_with_confidence(101), builtin_catalog());
        assert_eq!(result, Err(EngineError::InvalidConfidence { actual: 101 }));
    }

    #[test]
    fn low_confidence_skips_ranking_even_with_empty_catalog() {
        let empty = Catalog::new(vec![]).unwrap();
        let outcome = gate()
            .evaluate(&profile_with_confidence(30), &empty)
            .unwrap();
        assert!(outcome.needs_more_info());
    }

    #[test]
    fn high_confidence_with_empty_catalog_fails() {
        let empty = Catalog::new(vec![]).unwrap();
        let result = gate().evaluate(&profile_with_confidence(90), &empty);
        assert_eq!(result, Err(EngineError::EmptyCatalog));
    }

    #[test]
    fn custom_thresholds_shift_the_partition() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "gate": { "recommend_threshold": 90, "clarify_threshold": 80 } }"#)
                .unwrap();
        config.validate().unwrap();
        let gate = ConfidenceGate::new(&config);

        let outcome = gate
            .evaluate(&profile_with_confidence(85), builtin_catalog())
            .unwrap();
        assert!(matches!(outcome, GateOutcome::RecommendWithQuestions { .. }));
    }

    #[test]
    fn reevaluation_is_stateless() {
        let gate = gate();
        let profile = profile_with_confidence(85);
        let first = gate.evaluate(&profile, builtin_catalog()).unwrap();
        let second = gate.evaluate(&profile, builtin_catalog()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn stem_scenario_recommends_software_engineering() {
        let catalog = Catalog::new(vec![CatalogEntry::new(
            CareerCategory::Stem,
            "Software Engineering",
            ["coding", "mathematics", "problem-solving", "technology"],
        )])
        .unwrap();
        let outcome = gate()
            .evaluate(&profile_with_confidence(85), &catalog)
            .unwrap();

        let top = &outcome.recommendations()[0];
        assert!(matches!(outcome, GateOutcome::Recommend { .. }));
        assert_eq!(top.category, CareerCategory::Stem);
        assert_eq!(top.subcategory, "Software Engineering");
        assert!(top.alignment_score.value() > 0);
        assert!(top.matching_factors.contains(&"coding".to_string()));
        assert!(top.matching_factors.contains(&"mathematics".to_string()));
    }
}
