//! PreferenceProfile value object.
//!
//! A profile is produced once per conversation turn by the extraction
//! collaborator and never mutated afterwards; merging clarification
//! answers into a new profile is the collaborator's job.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EngineError, ProfileField};

/// Structured extraction of a user's career preferences.
///
/// Every sequence field is always present; an empty vector means "the
/// conversation said nothing about this bucket", which downstream
/// scoring treats as an empty set, not an error. Duplicates are allowed
/// and insertion order is preserved for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub values: Vec<String>,
    pub work_environment: Vec<String>,
    pub subjects_enjoyed: Vec<String>,
    pub hobbies: Vec<String>,
    pub personality_traits: Vec<String>,
    pub career_goals: Vec<String>,
    pub dislikes: Vec<String>,
    /// Extractor-reported certainty that the profile is complete and
    /// accurate. The confidence gate validates the 0-100 contract.
    pub confidence_score: u8,
}

impl PreferenceProfile {
    /// Creates an empty profile with the given confidence score.
    pub fn new(confidence_score: u8) -> Self {
        Self {
            confidence_score,
            ..Self::default()
        }
    }

    /// Parses a profile from collaborator JSON.
    ///
    /// Every sequence field must be present: defaulting missing fields
    /// to empty is the extraction collaborator's job, and a payload
    /// that skips one is a contract violation.
    pub fn from_json(payload: &str) -> Result<Self, EngineError> {
        serde_json::from_str(payload).map_err(|e| EngineError::invalid_profile(e.to_string()))
    }

    /// Sets the interests terms.
    pub fn with_interests<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the skills terms.
    pub fn with_skills<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the values terms.
    pub fn with_values<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the work environment terms.
    pub fn with_work_environment<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.work_environment = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the subjects enjoyed terms.
    pub fn with_subjects_enjoyed<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects_enjoyed = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the hobbies terms.
    pub fn with_hobbies<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hobbies = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the personality traits terms.
    pub fn with_personality_traits<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.personality_traits = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the career goals terms.
    pub fn with_career_goals<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.career_goals = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the dislikes terms.
    pub fn with_dislikes<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dislikes = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the terms stored under a field.
    pub fn terms(&self, field: ProfileField) -> &[String] {
        match field {
            ProfileField::Skills => &self.skills,
            ProfileField::Interests => &self.interests,
            ProfileField::CareerGoals => &self.career_goals,
            ProfileField::SubjectsEnjoyed => &self.subjects_enjoyed,
            ProfileField::Values => &self.values,
            ProfileField::WorkEnvironment => &self.work_environment,
            ProfileField::PersonalityTraits => &self.personality_traits,
            ProfileField::Hobbies => &self.hobbies,
            ProfileField::Dislikes => &self.dislikes,
        }
    }

    /// Returns the number of terms stored under a field.
    pub fn term_count(&self, field: ProfileField) -> usize {
        self.terms(field).len()
    }

    /// Iterates over (field, term) pairs across the eight descriptive
    /// buckets in field-priority order. Dislikes are excluded.
    pub fn descriptive_terms(&self) -> impl Iterator<Item = (ProfileField, &str)> {
        ProfileField::DESCRIPTIVE.iter().flat_map(move |&field| {
            self.terms(field).iter().map(move |t| (field, t.as_str()))
        })
    }

    /// Returns the descriptive fields ordered sparsest-first.
    ///
    /// Ties are broken by field priority, so the result is stable for
    /// identical input. Used to pick which clarifying questions to ask.
    pub fn fields_by_sparseness(&self) -> Vec<ProfileField> {
        let mut fields = ProfileField::DESCRIPTIVE.to_vec();
        fields.sort_by_key(|&f| (self.term_count(f), f.priority()));
        fields
    }

    /// Returns true if every descriptive bucket is empty.
    pub fn is_blank(&self) -> bool {
        ProfileField::DESCRIPTIVE
            .iter()
            .all(|&f| self.terms(f).is_empty())
    }
}
