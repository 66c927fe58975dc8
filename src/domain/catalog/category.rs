//! Career category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six top-level career domains of the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareerCategory {
    #[serde(rename = "STEM")]
    Stem,
    #[serde(rename = "Arts & Creative")]
    ArtsCreative,
    #[serde(rename = "Sports & Fitness")]
    SportsFitness,
    #[serde(rename = "Business & Entrepreneurship")]
    BusinessEntrepreneurship,
    #[serde(rename = "Healthcare & Medicine")]
    HealthcareMedicine,
    #[serde(rename = "Education & Social Services")]
    EducationSocialServices,
}

impl CareerCategory {
    /// All six categories, in taxonomy declaration order.
    pub const ALL: [CareerCategory; 6] = [
        CareerCategory::Stem,
        CareerCategory::ArtsCreative,
        CareerCategory::SportsFitness,
        CareerCategory::BusinessEntrepreneurship,
        CareerCategory::HealthcareMedicine,
        CareerCategory::EducationSocialServices,
    ];

    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            CareerCategory::Stem => "STEM",
            CareerCategory::ArtsCreative => "Arts & Creative",
            CareerCategory::SportsFitness => "Sports & Fitness",
            CareerCategory::BusinessEntrepreneurship => "Business & Entrepreneurship",
            CareerCategory::HealthcareMedicine => "Healthcare & Medicine",
            CareerCategory::EducationSocialServices => "Education & Social Services",
        }
    }
}

impl fmt::Display for CareerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_six_distinct_categories() {
        assert_eq!(CareerCategory::ALL.len(), 6);
        for (i, a) in CareerCategory::ALL.iter().enumerate() {
            for b in &CareerCategory::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn category_serializes_to_taxonomy_label() {
        let json = serde_json::to_string(&CareerCategory::Stem).unwrap();
        assert_eq!(json, "\"STEM\"");
        let json = serde_json::to_string(&CareerCategory::ArtsCreative).unwrap();
        assert_eq!(json, "\"Arts & Creative\"");
    }

    #[test]
    fn category_deserializes_from_taxonomy_label() {
        let cat: CareerCategory = serde_json::from_str("\"Healthcare & Medicine\"").unwrap();
        assert_eq!(cat, CareerCategory::HealthcareMedicine);
    }

    #[test]
    fn category_displays_label() {
        assert_eq!(format!("{}", CareerCategory::Stem), "STEM");
    }
}
