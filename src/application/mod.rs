//! Application layer - orchestration over the domain.
//!
//! Coordinates the extraction port with the confidence gate so a
//! caller can go from raw conversation text to a gate outcome in one
//! call.

mod guidance;

pub use guidance::{GuidanceError, GuidanceService};
