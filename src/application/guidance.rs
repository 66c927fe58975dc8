//! Guidance service - conversation text to gate outcome.

use std::sync::Arc;

use thiserror::Error;

use crate::config::EngineConfig;
use crate::domain::catalog::Catalog;
use crate::domain::foundation::EngineError;
use crate::domain::gate::{ConfidenceGate, GateOutcome};
use crate::domain::profile::PreferenceProfile;
use crate::ports::{ExtractionError, PreferenceExtractor};

/// Errors that can occur while processing a conversation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GuidanceError {
    /// The extraction collaborator failed.
    #[error("Preference extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    /// The engine rejected the profile or catalog.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Turns conversation text into ranked guidance or clarifying questions.
///
/// The catalog is shared read-only; concurrent conversations need no
/// coordination beyond cloning the service handle.
pub struct GuidanceService {
    extractor: Arc<dyn PreferenceExtractor>,
    catalog: Arc<Catalog>,
    gate: ConfidenceGate,
}

impl GuidanceService {
    /// Creates a service over an extractor adapter and a catalog.
    pub fn new(
        extractor: Arc<dyn PreferenceExtractor>,
        catalog: Arc<Catalog>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            extractor,
            catalog,
            gate: ConfidenceGate::new(config),
        }
    }

    /// Processes one conversation turn end to end.
    pub async fn process_conversation(
        &self,
        conversation: &str,
    ) -> Result<GateOutcome, GuidanceError> {
        let profile = self.extractor.extract(conversation).await?;
        tracing::info!(
            confidence = profile.confidence_score,
            "extracted preference profile"
        );
        Ok(self.evaluate_profile(&profile)?)
    }

    /// Evaluates an already-extracted profile, skipping the extractor.
    pub fn evaluate_profile(&self, profile: &PreferenceProfile) -> Result<GateOutcome, EngineError> {
        self.gate.evaluate(profile, &self.catalog)
    }
}
