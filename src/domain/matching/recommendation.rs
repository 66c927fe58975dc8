//! Career recommendation output value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::{CatalogEntry, CareerCategory};
use crate::domain::foundation::{Percentage, ProfileField};

/// How serious a potential concern is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcernSeverity {
    /// An explicit dislike collides with what the career involves.
    Conflict,
    /// The profile is silent on a bucket the match would rely on.
    Gap,
}

/// A disliked or absent trait suggesting a mismatch with a career.
///
/// The two variants are distinct classes: a dislike conflict is an
/// active clash, a missing signal only means the conversation never
/// covered that bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Concern {
    DislikeConflict { term: String },
    MissingSignal { field: ProfileField },
}

impl Concern {
    /// Returns the severity class of this concern.
    pub fn severity(&self) -> ConcernSeverity {
        match self {
            Concern::DislikeConflict { .. } => ConcernSeverity::Conflict,
            Concern::MissingSignal { .. } => ConcernSeverity::Gap,
        }
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Concern::DislikeConflict { term } => {
                write!(f, "You mentioned disliking {term}, which this path involves")
            }
            Concern::MissingSignal { field } => {
                write!(f, "Your {field} were not covered in the conversation")
            }
        }
    }
}

/// A ranked career match with its supporting evidence.
///
/// Created fresh per ranking call; immutable value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub category: CareerCategory,
    pub subcategory: String,
    pub alignment_score: Percentage,
    /// Profile terms that contributed, highest contribution first.
    pub matching_factors: Vec<String>,
    /// Conflicts first, then gaps, each in deterministic order.
    pub potential_concerns: Vec<Concern>,
    /// Human-readable synthesis of factors and catalog notes.
    pub explanation: String,
}

/// Builds the explanation text from matching factors and the entry's
/// static notes.
pub(crate) fn synthesize_explanation(entry: &CatalogEntry, factors: &[String]) -> String {
    let mut explanation = if factors.is_empty() {
        format!(
            "{} is a broad fit, though few of your stated preferences map onto it directly.",
            entry.subcategory
        )
    } else {
        format!(
            "{} fits your profile through {}.",
            entry.subcategory,
            factors.join(", ")
        )
    };
    if let Some(advantages) = &entry.advantages {
        explanation.push(' ');
        explanation.push_str(advantages);
    }
    if let Some(growth) = &entry.growth_notes {
        explanation.push(' ');
        explanation.push_str(growth);
    }
    explanation
}
