//! Catalog entry and catalog collection types.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::ValidationError;

use super::CareerCategory;

/// One (category, subcategory) career definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub category: CareerCategory,
    pub subcategory: String,
    /// Traits, skills, and interests typical of this career.
    pub indicator_terms: Vec<String>,
    /// Optional free text used only for explanation generation.
    pub advantages: Option<String>,
    pub growth_notes: Option<String>,
}

impl CatalogEntry {
    /// Creates a new catalog entry.
    pub fn new<I, S>(category: CareerCategory, subcategory: impl Into<String>, indicators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            subcategory: subcategory.into(),
            indicator_terms: indicators.into_iter().map(Into::into).collect(),
            advantages: None,
            growth_notes: None,
        }
    }

    /// Attaches advantages text for explanations.
    pub fn with_advantages(mut self, text: impl Into<String>) -> Self {
        self.advantages = Some(text.into());
        self
    }

    /// Attaches growth notes for explanations.
    pub fn with_growth_notes(mut self, text: impl Into<String>) -> Self {
        self.growth_notes = Some(text.into());
        self
    }
}

/// The full career taxonomy, immutable after construction.
///
/// Declaration order is meaningful: equal-scoring entries rank in the
/// order they were declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate (category, subcategory) pairs
    /// and entries with an empty subcategory name.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, ValidationError> {
        let mut seen: HashSet<(CareerCategory, &str)> = HashSet::new();
        for entry in &entries {
            if entry.subcategory.trim().is_empty() {
                return Err(ValidationError::empty_field("subcategory"));
            }
            if !seen.insert((entry.category, entry.subcategory.as_str())) {
                return Err(ValidationError::duplicate(
                    "catalog entry",
                    format!("{}/{}", entry.category, entry.subcategory),
                ));
            }
        }
        Ok(Self { entries })
    }

    /// Returns the entries in declaration order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: CareerCategory, subcategory: &str) -> CatalogEntry {
        CatalogEntry::new(category, subcategory, ["coding"])
    }

    #[test]
    fn catalog_accepts_distinct_entries() {
        let catalog = Catalog::new(vec![
            entry(CareerCategory::Stem, "Software Engineering"),
            entry(CareerCategory::Stem, "Data Science"),
            entry(CareerCategory::ArtsCreative, "Game Design"),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn catalog_rejects_duplicate_pairs() {
        let result = Catalog::new(vec![
            entry(CareerCategory::Stem, "Data Science"),
            entry(CareerCategory::Stem, "Data Science"),
        ]);
        assert_eq!(
            result,
            Err(ValidationError::duplicate("catalog entry", "STEM/Data Science"))
        );
    }

    #[test]
    fn same_subcategory_under_different_categories_is_allowed() {
        // "Medical Research" style overlaps exist across domains.
        let result = Catalog::new(vec![
            entry(CareerCategory::Stem, "Research"),
            entry(CareerCategory::HealthcareMedicine, "Research"),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn catalog_rejects_blank_subcategory() {
        let result = Catalog::new(vec![entry(CareerCategory::Stem, "  ")]);
        assert_eq!(result, Err(ValidationError::empty_field("subcategory")));
    }

    #[test]
    fn empty_catalog_constructs_but_reports_empty() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn entries_preserve_declaration_order() {
        let catalog = Catalog::new(vec![
            entry(CareerCategory::Stem, "B"),
            entry(CareerCategory::Stem, "A"),
        ])
        .unwrap();
        assert_eq!(catalog.entries()[0].subcategory, "B");
        assert_eq!(catalog.entries()[1].subcategory, "A");
    }
}
