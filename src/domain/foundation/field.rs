//! Profile field enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine term buckets of a preference profile.
///
/// Declaration order is the canonical field priority: it decides which
/// field claims a term that appears in several buckets, how matching
/// factors break ties, and which clarifying questions come first.
/// Occupationally stronger signals (skills, interests) come before
/// weaker ones (hobbies). `Dislikes` is last and never contributes
/// positive weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Skills,
    Interests,
    CareerGoals,
    SubjectsEnjoyed,
    Values,
    WorkEnvironment,
    PersonalityTraits,
    Hobbies,
    Dislikes,
}

impl ProfileField {
    /// The eight descriptive buckets, in priority order. Excludes dislikes.
    pub const DESCRIPTIVE: [ProfileField; 8] = [
        ProfileField::Skills,
        ProfileField::Interests,
        ProfileField::CareerGoals,
        ProfileField::SubjectsEnjoyed,
        ProfileField::Values,
        ProfileField::WorkEnvironment,
        ProfileField::PersonalityTraits,
        ProfileField::Hobbies,
    ];

    /// Returns the human-readable label for this field.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Skills => "skills",
            ProfileField::Interests => "interests",
            ProfileField::CareerGoals => "career goals",
            ProfileField::SubjectsEnjoyed => "subjects enjoyed",
            ProfileField::Values => "values",
            ProfileField::WorkEnvironment => "work environment",
            ProfileField::PersonalityTraits => "personality traits",
            ProfileField::Hobbies => "hobbies",
            ProfileField::Dislikes => "dislikes",
        }
    }

    /// Returns this field's position in the priority order.
    pub fn priority(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptive_fields_exclude_dislikes() {
        assert_eq!(ProfileField::DESCRIPTIVE.len(), 8);
        assert!(!ProfileField::DESCRIPTIVE.contains(&ProfileField::Dislikes));
    }

    #[test]
    fn skills_outrank_hobbies() {
        assert!(ProfileField::Skills.priority() < ProfileField::Hobbies.priority());
    }

    #[test]
    fn descriptive_order_matches_priority() {
        for window in ProfileField::DESCRIPTIVE.windows(2) {
            assert!(window[0].priority() < window[1].priority());
        }
    }

    #[test]
    fn field_displays_label() {
        assert_eq!(format!("{}", ProfileField::CareerGoals), "career goals");
        assert_eq!(format!("{}", ProfileField::WorkEnvironment), "work environment");
    }

    #[test]
    fn field_serializes_to_snake_case() {
        let json = serde_json::to_string(&ProfileField::SubjectsEnjoyed).unwrap();
        assert_eq!(json, "\"subjects_enjoyed\"");
    }
}
