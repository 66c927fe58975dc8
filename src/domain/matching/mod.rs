//! Matching module - Pure domain services for scoring and ranking.
//!
//! Every operation here is a deterministic function of its inputs plus
//! policy constants from config; there is no shared mutable state.

mod normalize;
mod ranker;
mod recommendation;
mod scorer;

pub use normalize::{normalize_term, terms_match};
pub use ranker::RecommendationRanker;
pub use recommendation::{CareerRecommendation, Concern, ConcernSeverity};
pub use scorer::{AlignmentScorer, ScoreBreakdown};
