use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::config::MatcherKind;

/// Narrows the candidate paths down to the ones matching the search text
pub struct CandidateMatcher {
    kind: MatcherKind,
    matcher: SkimMatcherV2,
}

impl fmt::Debug for CandidateMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateMatcher")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl Default for CandidateMatcher {
    fn default() -> Self {
        Self::new(MatcherKind::default())
    }
}

impl CandidateMatcher {
    pub fn new(kind: MatcherKind) -> Self {
        Self {
            kind,
            matcher: SkimMatcherV2::default(),
        }
    }

    pub fn kind(&self) -> MatcherKind {
        self.kind
    }

    /// Indices of matching entries
    ///
    /// The query is split into space-separated terms (like fzf) and every term
    /// must match. Fuzzy mode ranks by total score, keeping index order on
    /// ties; ordered mode keeps index order.
    pub fn filter(&self, query: &str, entries: &[String]) -> Vec<usize> {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return (0..entries.len()).collect();
        }

        match self.kind {
            MatcherKind::Fuzzy => {
                let mut scored: Vec<(usize, i64)> = entries
                    .iter()
                    .enumerate()
                    .filter_map(|(idx, entry)| {
                        let mut total_score: i64 = 0;
                        for term in &terms {
                            total_score += self.matcher.fuzzy_match(entry, term)?;
                        }
                        Some((idx, total_score))
                    })
                    .collect();

                scored.sort_by(|a, b| b.1.cmp(&a.1));

                scored.into_iter().map(|(idx, _)| idx).collect()
            }
            MatcherKind::Ordered => entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| terms.iter().all(|term| is_ordered_match(entry, term)))
                .map(|(idx, _)| idx)
                .collect(),
        }
    }
}

/// Every character of `term` occurs in `candidate`, in order
fn is_ordered_match(candidate: &str, term: &str) -> bool {
    let mut remaining = candidate.chars();
    term.chars().all(|wanted| remaining.any(|c| c == wanted))
}
