//! Deterministic substring scorer.

use crate::traits::FuzzyScorer;

/// A [`FuzzyScorer`] that matches case-insensitive substrings.
///
/// The score is the negated match length, so shorter texts containing the
/// query score higher and equal-length matches tie - handy for asserting
/// the query layer's order-preserving tie-break.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringScorer;

impl FuzzyScorer for SubstringScorer {
    fn score(&self, query: &str, text: &str) -> Option<i64> {
        if text.to_lowercase().contains(&query.to_lowercase()) {
            Some(-(text.chars().count() as i64))
        } else {
            None
        }
    }
}
