//! PreferenceExtractor port for conversation analysis.
//!
//! The engine treats extraction as a single opaque call: it either
//! returns a structurally complete profile or fails explicitly. An
//! adapter that parses model output must default missing sequence
//! fields to empty before handing the profile over; the engine never
//! substitutes defaults itself.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::profile::PreferenceProfile;

/// Errors an extraction adapter can report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    /// The conversation text was empty or whitespace only.
    #[error("Conversation text is empty")]
    EmptyConversation,

    /// The underlying provider call failed.
    #[error("Extraction provider failed: {0}")]
    Provider(String),

    /// The provider responded, but not with a usable profile.
    #[error("Extractor returned a malformed payload: {0}")]
    MalformedPayload(String),
}

/// Extracts a structured preference profile from conversation text.
///
/// This is the only suspension point in the system; everything past it
/// is synchronous and pure.
#[async_trait]
pub trait PreferenceExtractor: Send + Sync {
    /// Analyzes a conversation and returns the extracted profile.
    async fn extract(&self, conversation: &str) -> Result<PreferenceProfile, ExtractionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_errors_display_their_cause() {
        let err = ExtractionError::Provider("timeout".into());
        assert_eq!(format!("{}", err), "Extraction provider failed: timeout");

        let err = ExtractionError::MalformedPayload("not JSON".into());
        assert_eq!(
            format!("{}", err),
            "Extractor returned a malformed payload: not JSON"
        );
    }
}
