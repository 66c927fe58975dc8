//! Term normalization and containment matching.

/// Lowercases a term and collapses internal whitespace.
pub fn normalize_term(term: &str) -> String {
    term.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Returns true if two normalized terms match.
///
/// A profile term matches an indicator if either contains the other,
/// which tolerates phrase/word granularity mismatches ("team sports"
/// vs "sports"). Empty terms never match.
pub fn terms_match(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}
