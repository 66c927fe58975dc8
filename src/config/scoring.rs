//! Scoring and ranking configuration

use serde::Deserialize;

use crate::domain::foundation::ProfileField;

use super::error::ValidationError;

/// Per-field contribution weights for alignment scoring.
///
/// Weights are a tunable table rather than hardcoded policy. Defaults favor
/// occupationally strong signals (skills, interests) over weak ones
/// (hobbies). Dislikes never contribute positive weight.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldWeights {
    #[serde(default = "default_skills_weight")]
    pub skills: u8,
    #[serde(default = "default_interests_weight")]
    pub interests: u8,
    #[serde(default = "default_career_goals_weight")]
    pub career_goals: u8,
    #[serde(default = "default_subjects_weight")]
    pub subjects_enjoyed: u8,
    #[serde(default = "default_values_weight")]
    pub values: u8,
    #[serde(default = "default_work_environment_weight")]
    pub work_environment: u8,
    #[serde(default = "default_personality_weight")]
    pub personality_traits: u8,
    #[serde(default = "default_hobbies_weight")]
    pub hobbies: u8,
}

fn default_skills_weight() -> u8 {
    12
}

fn default_interests_weight() -> u8 {
    12
}

fn default_career_goals_weight() -> u8 {
    10
}

fn default_subjects_weight() -> u8 {
    9
}

fn default_values_weight() -> u8 {
    8
}

fn default_work_environment_weight() -> u8 {
    7
}

fn default_personality_weight() -> u8 {
    7
}

fn default_hobbies_weight() -> u8 {
    5
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            interests: default_interests_weight(),
            career_goals: default_career_goals_weight(),
            subjects_enjoyed: default_subjects_weight(),
            values: default_values_weight(),
            work_environment: default_work_environment_weight(),
            personality_traits: default_personality_weight(),
            hobbies: default_hobbies_weight(),
        }
    }
}

impl FieldWeights {
    /// Returns the weight a matching term from this field contributes.
    pub fn weight_for(&self, field: ProfileField) -> u8 {
        match field {
            ProfileField::Skills => self.skills,
            ProfileField::Interests => self.interests,
            ProfileField::CareerGoals => self.career_goals,
            ProfileField::SubjectsEnjoyed => self.subjects_enjoyed,
            ProfileField::Values => self.values,
            ProfileField::WorkEnvironment => self.work_environment,
            ProfileField::PersonalityTraits => self.personality_traits,
            ProfileField::Hobbies => self.hobbies,
            ProfileField::Dislikes => 0,
        }
    }

    fn max_weight(&self) -> u8 {
        ProfileField::DESCRIPTIVE
            .iter()
            .map(|&f| self.weight_for(f))
            .max()
            .unwrap_or(0)
    }
}

/// Scoring and ranking policy.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Per-field contribution weights.
    #[serde(default)]
    pub weights: FieldWeights,

    /// Score subtracted per disliked term overlapping an entry's indicators.
    #[serde(default = "default_dislike_penalty")]
    pub dislike_penalty: u8,

    /// Cap on reported matching factors per recommendation.
    #[serde(default = "default_max_matching_factors")]
    pub max_matching_factors: usize,

    /// Entries scoring at or below this are dropped from rankings.
    #[serde(default = "default_relevance_floor")]
    pub relevance_floor: u8,

    /// Number of recommendations returned by a ranking.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_dislike_penalty() -> u8 {
    15
}

fn default_max_matching_factors() -> usize {
    5
}

fn default_relevance_floor() -> u8 {
    0
}

fn default_top_n() -> usize {
    3
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            dislike_penalty: default_dislike_penalty(),
            max_matching_factors: default_max_matching_factors(),
            relevance_floor: default_relevance_floor(),
            top_n: default_top_n(),
        }
    }
}

impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.top_n == 0 {
            return Err(ValidationError::InvalidTopN);
        }
        if self.relevance_floor > 100 {
            return Err(ValidationError::InvalidRelevanceFloor);
        }
        if self.max_matching_factors == 0 {
            return Err(ValidationError::InvalidFactorCap);
        }
        if self.weights.max_weight() == 0 {
            return Err(ValidationError::AllWeightsZero);
        }
        Ok(())
    }
}
