//! Recommendation ranker - applies the scorer across the catalog.

use std::cmp::Reverse;

use crate::config::ScoringConfig;
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{EngineError, ProfileField};
use crate::domain::profile::PreferenceProfile;

use super::recommendation::{synthesize_explanation, CareerRecommendation, Concern};
use super::scorer::AlignmentScorer;

/// Profile buckets whose absence is worth flagging on a match.
const CORE_SIGNAL_FIELDS: [ProfileField; 3] = [
    ProfileField::Skills,
    ProfileField::Interests,
    ProfileField::CareerGoals,
];

/// Ranks the whole catalog against a profile.
#[derive(Debug, Clone)]
pub struct RecommendationRanker {
    scorer: AlignmentScorer,
    config: ScoringConfig,
}

impl RecommendationRanker {
    /// Creates a ranker with the given policy.
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            scorer: AlignmentScorer::new(config.clone()),
            config,
        }
    }

    /// Scores every catalog entry and returns the top matches.
    ///
    /// Entries scoring at or below the relevance floor are dropped; an
    /// empty result means "no strong matches" and is not an error. Ties
    /// rank in catalog declaration order.
    ///
    /// # Errors
    /// `EngineError::EmptyCatalog` if the catalog has zero entries,
    /// detected before any scoring.
    pub fn rank(
        &self,
        profile: &PreferenceProfile,
        catalog: &Catalog,
    ) -> Result<Vec<CareerRecommendation>, EngineError> {
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        let mut scored: Vec<_> = catalog
            .entries()
            .iter()
            .map(|entry| (entry, self.scorer.score(profile, entry)))
            .filter(|(_, breakdown)| breakdown.score.value() > self.config.relevance_floor)
            .collect();

        // Stable sort: equal scores keep catalog declaration order.
        scored.sort_by_key(|(_, breakdown)| Reverse(breakdown.score));
        scored.truncate(self.config.top_n);

        tracing::debug!(
            retained = scored.len(),
            catalog_size = catalog.len(),
            "ranked catalog against profile"
        );

        let recommendations = scored
            .into_iter()
            .map(|(entry, breakdown)| {
                let mut concerns: Vec<Concern> = breakdown
                    .dislike_conflicts
                    .into_iter()
                    .map(|term| Concern::DislikeConflict { term })
                    .collect();
                concerns.extend(
                    CORE_SIGNAL_FIELDS
                        .iter()
                        .filter(|&&field| profile.term_count(field) == 0)
                        .map(|&field| Concern::MissingSignal { field }),
                );

                let explanation = synthesize_explanation(entry, &breakdown.matching_factors);
                CareerRecommendation {
                    category: entry.category,
                    subcategory: entry.subcategory.clone(),
                    alignment_score: breakdown.score,
                    matching_factors: breakdown.matching_factors,
                    potential_concerns: concerns,
                    explanation,
                }
            })
            .collect();

        Ok(recommendations)
    }
}
