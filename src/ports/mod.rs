//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PreferenceExtractor` - Port for the natural-language extraction
//!   collaborator that turns conversation text into a profile

mod preference_extractor;

pub use preference_extractor::{ExtractionError, PreferenceExtractor};
