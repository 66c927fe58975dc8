//! Preference profile - the engine's input value object.

mod preferences;

pub use preferences::PreferenceProfile;
