//! Confidence gate - decides what a profile evaluation returns.
//!
//! One evaluation is a fresh, stateless pass: validate the confidence
//! contract, branch on the configured thresholds, and either rank the
//! catalog, rank it with clarifying questions attached, or only ask
//! for more input.

mod gate;
mod outcome;
mod questions;

pub use gate::ConfidenceGate;
pub use outcome::GateOutcome;
pub use questions::select_questions;
