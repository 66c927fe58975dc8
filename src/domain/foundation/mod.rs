//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the
//! vocabulary of the Career Compass domain.

mod errors;
mod field;
mod percentage;

pub use errors::{EngineError, ValidationError};
pub use field::ProfileField;
pub use percentage::Percentage;
