//! Alignment scorer - profile-to-entry affinity.
//!
//! The normalized containment match below is the deterministic baseline
//! strategy; a semantic (embedding-based) scorer can replace it behind
//! the same `score` contract.

use std::collections::HashSet;

use crate::config::ScoringConfig;
use crate::domain::catalog::CatalogEntry;
use crate::domain::foundation::Percentage;
use crate::domain::profile::PreferenceProfile;

use super::normalize::{normalize_term, terms_match};

/// The result of scoring one profile against one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Alignment in [0, 100].
    pub score: Percentage,
    /// Contributing profile terms, highest weight first, capped.
    pub matching_factors: Vec<String>,
    /// Disliked profile terms overlapping the entry's indicators.
    pub dislike_conflicts: Vec<String>,
}

/// Computes alignment between a preference profile and a catalog entry.
#[derive(Debug, Clone)]
pub struct AlignmentScorer {
    config: ScoringConfig,
}

impl AlignmentScorer {
    /// Creates a scorer with the given policy.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Scores a profile against one catalog entry.
    ///
    /// Properties: monotonic in matching terms, bounded to [0, 100],
    /// and deterministic for identical input (fields are walked in
    /// priority order, terms in insertion order).
    pub fn score(&self, profile: &PreferenceProfile, entry: &CatalogEntry) -> ScoreBreakdown {
        let indicators: Vec<String> = entry
            .indicator_terms
            .iter()
            .map(|t| normalize_term(t))
            .collect();

        // Each distinct term is credited once, to the first field that
        // declares it.
        let mut seen: HashSet<String> = HashSet::new();
        let mut matches: Vec<(u8, String)> = Vec::new();
        for (field, term) in profile.descriptive_terms() {
            let normalized = normalize_term(term);
            if normalized.is_empty() || !seen.insert(normalized.clone()) {
                continue;
            }
            if indicators.iter().any(|ind| terms_match(&normalized, ind)) {
                matches.push((self.config.weights.weight_for(field), term.to_string()));
            }
        }

        let mut conflict_seen: HashSet<String> = HashSet::new();
        let mut dislike_conflicts: Vec<String> = Vec::new();
        for term in &profile.dislikes {
            let normalized = normalize_term(term);
            if normalized.is_empty() || !conflict_seen.insert(normalized.clone()) {
                continue;
            }
            if indicators.iter().any(|ind| terms_match(&normalized, ind)) {
                dislike_conflicts.push(term.clone());
            }
        }

        let positive: i64 = matches.iter().map(|(w, _)| i64::from(*w)).sum();
        let penalty = dislike_conflicts.len() as i64 * i64::from(self.config.dislike_penalty);
        let score = Percentage::clamped(positive - penalty);

        // Stable sort keeps field/insertion order among equal weights.
        matches.sort_by_key(|(weight, _)| std::cmp::Reverse(*weight));
        let matching_factors = matches
            .into_iter()
            .take(self.config.max_matching_factors)
            .map(|(_, term)| term)
            .collect();

        ScoreBreakdown {
            score,
            matching_factors,
            dislike_conflicts,
        }
    }
}
