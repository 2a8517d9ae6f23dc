//! Fuzzy scorer backed by the skim matching algorithm.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::traits::FuzzyScorer;

/// Production [`FuzzyScorer`] using [`SkimMatcherV2`].
#[derive(Default)]
pub struct SkimScorer {
    matcher: SkimMatcherV2,
}

impl SkimScorer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FuzzyScorer for SkimScorer {
    fn score(&self, query: &str, text: &str) -> Option<i64> {
        self.matcher.fuzzy_match(text, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsequence_matches() {
        let scorer = SkimScorer::new();
        assert!(scorer.score("prj", "projects/rust").is_some());
    }

    #[test]
    fn test_non_match_returns_none() {
        let scorer = SkimScorer::new();
        assert!(scorer.score("zzz", "projects").is_none());
    }

    #[test]
    fn test_tighter_match_scores_higher() {
        let scorer = SkimScorer::new();
        let exact = scorer.score("notes", "notes").unwrap();
        let spread = scorer.score("notes", "n/o/t/e/s-archive").unwrap();
        assert!(exact > spread);
    }
}
