//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `profile` - The extracted preference profile consumed by the engine
//! - `catalog` - Static career taxonomy reference data
//! - `matching` - Pure domain services for scoring and ranking
//! - `gate` - Confidence-driven control flow over a profile evaluation

pub mod catalog;
pub mod foundation;
pub mod gate;
pub mod matching;
pub mod profile;
