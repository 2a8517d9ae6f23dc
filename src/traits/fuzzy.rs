//! Fuzzy-match scoring capability.

/// The host's fuzzy-match primitive.
///
/// Scoring semantics are entirely the implementation's; the query layer
/// only requires that `None` means "no match" and that a higher score is a
/// better match.
pub trait FuzzyScorer: Send + Sync {
    /// Score `text` against `query`; `None` when it does not match.
    fn score(&self, query: &str, text: &str) -> Option<i64>;
}
