//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` crate. Configuration is loaded with the
//! `CAREER_COMPASS_` prefix and nested values use double underscores as
//! separators (e.g. `CAREER_COMPASS_GATE__RECOMMEND_THRESHOLD=75`).
//!
//! # Example
//!
//! ```no_run
//! use career_compass::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! println!("Recommending at {}+", config.gate.recommend_threshold);
//! ```

mod error;
mod gate;
mod scoring;

pub use error::{ConfigError, ValidationError};
pub use gate::GateConfig;
pub use scoring::{FieldWeights, ScoringConfig};

use serde::Deserialize;

/// Root engine configuration
///
/// Every policy constant of the matching engine lives here: gate
/// thresholds, field weights, ranking limits. Load with
/// [`EngineConfig::load()`] or start from [`Default`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Confidence gate thresholds
    #[serde(default)]
    pub gate: GateConfig,

    /// Scoring and ranking policy
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl EngineConfig {
    /// Loads configuration from environment variables and validates it.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("CAREER_COMPASS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: EngineConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.gate.validate()?;
        self.scoring.validate()?;
        Ok(())
    }
}
