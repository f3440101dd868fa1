//! Approximate-match index over the local claim corpus.
//!
//! Scoring per field is an approximate-substring edit distance (Sellers'
//! algorithm: the query must be matched in full, the field's prefix and
//! suffix are free) normalized by query length, plus a small penalty for how
//! far into the field the match starts:
//!
//! ```text
//! field_score = errors / query_len + start / LOCATION_DISTANCE   (capped at 1.0)
//! ```
//!
//! minimized over every alignment, so a close match near the front can beat
//! an exact one far into the field.
//!
//! A claim's score is the product of its qualifying field scores, so a claim
//! matching in both title and description ranks above one matching in only
//! one of them.

use vt_core::{LocalClaim, SimilarityMatch};

/// Maximum score a field may have to count as a match. `0.0` is exact.
pub const RELEVANCE_THRESHOLD: f64 = 0.4;

/// Characters of offset that add a full point of score.
const LOCATION_DISTANCE: f64 = 100.0;

struct IndexedClaim {
    claim: LocalClaim,
    title: Vec<char>,
    description: Vec<char>,
}

/// Immutable search index built from one corpus snapshot.
///
/// Rebuild with [`ClaimIndex::build`] whenever the corpus changes.
pub struct ClaimIndex {
    entries: Vec<IndexedClaim>,
}

impl ClaimIndex {
    #[must_use]
    pub fn build(claims: Vec<LocalClaim>) -> Self {
        let entries = claims
            .into_iter()
            .map(|claim| IndexedClaim {
                title: normalize(&claim.title),
                description: normalize(&claim.description),
                claim,
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Claims matching `text`, best (lowest score) first.
    ///
    /// Ties keep corpus order. A blank query matches nothing.
    #[must_use]
    pub fn search(&self, text: &str) -> Vec<SimilarityMatch> {
        let query = normalize(text.trim());
        if query.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<SimilarityMatch> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let scores = [
                    field_score(&query, &entry.title),
                    field_score(&query, &entry.description),
                ];
                let qualifying: Vec<f64> = scores
                    .into_iter()
                    .flatten()
                    .filter(|score| *score <= RELEVANCE_THRESHOLD)
                    .collect();
                if qualifying.is_empty() {
                    return None;
                }
                Some(SimilarityMatch {
                    claim: entry.claim.clone(),
                    score: qualifying.iter().product(),
                })
            })
            .collect();

        matches.sort_by(|a, b| a.score.total_cmp(&b.score));
        matches
    }
}

fn normalize(text: &str) -> Vec<char> {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Score `query` against one field; `None` for an empty field.
fn field_score(query: &[char], field: &[char]) -> Option<f64> {
    if field.is_empty() {
        return None;
    }
    let (errors, start) = best_alignment(query, field);
    Some(alignment_score(errors, start, query.len()).min(1.0))
}

#[allow(clippy::cast_precision_loss)]
fn alignment_score(errors: usize, start: usize, query_len: usize) -> f64 {
    errors as f64 / query_len as f64 + start as f64 / LOCATION_DISTANCE
}

/// Error count and start offset of the alignment of `query` inside `text`
/// with the lowest combined score. Ties keep the earliest start.
///
/// Every start offset is tried until the offset penalty alone can no longer
/// beat the best score found.
#[allow(clippy::cast_precision_loss)]
fn best_alignment(query: &[char], text: &[char]) -> (usize, usize) {
    let mut best = (query.len(), 0);
    let mut best_score = alignment_score(best.0, best.1, query.len());

    for start in 0..text.len() {
        if start as f64 / LOCATION_DISTANCE >= best_score {
            break;
        }
        let errors = anchored_errors(query, &text[start..], best.0);
        let score = alignment_score(errors, start, query.len());
        if score < best_score {
            best = (errors, start);
            best_score = score;
        }
    }

    best
}

/// Fewest edits to match all of `query` against a prefix of `text`.
///
/// Stops early once no cell of the current column can drop below `bound`.
fn anchored_errors(query: &[char], text: &[char], bound: usize) -> usize {
    // prev[i] = cost of aligning query[..i] with the text consumed so far.
    let mut prev: Vec<usize> = (0..=query.len()).collect();
    let mut curr = prev.clone();
    let mut best = prev[query.len()];

    for (j, &tc) in text.iter().enumerate() {
        curr[0] = j + 1;
        for (i, &qc) in query.iter().enumerate() {
            let substitution = prev[i] + usize::from(qc != tc);
            let deletion = curr[i] + 1;
            let insertion = prev[i + 1] + 1;
            curr[i + 1] = substitution.min(deletion).min(insertion);
        }
        best = best.min(curr[query.len()]);
        std::mem::swap(&mut prev, &mut curr);
        if prev.iter().min().is_some_and(|&floor| floor >= best.min(bound)) {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chars(s: &str) -> Vec<char> {
        normalize(s)
    }

    fn claim(id: i64, title: &str, description: &str) -> LocalClaim {
        LocalClaim {
            id,
            title: title.into(),
            description: description.into(),
        }
    }

    #[test]
    fn exact_substring_has_no_errors() {
        assert_eq!(best_alignment(&chars("mars"), &chars("planet mars")), (0, 7));
        assert_eq!(best_alignment(&chars("mars"), &chars("mars")), (0, 0));
    }

    #[test]
    fn single_typo_costs_one() {
        assert_eq!(best_alignment(&chars("mars"), &chars("the mors rover")).0, 1);
    }

    #[test]
    fn query_longer_than_text_pays_for_the_difference() {
        assert_eq!(best_alignment(&chars("marsbar"), &chars("mars")).0, 3);
    }

    #[test]
    fn lower_score_beats_fewer_errors() {
        let description = format!("mars rovex {} mars rover", "x".repeat(60));
        assert_eq!(best_alignment(&chars("mars rover"), &chars(&description)), (1, 0));

        let index = ClaimIndex::build(vec![claim(1, "Space", &description)]);
        let matches = index.search("mars rover");
        assert_eq!(matches.len(), 1);
        assert!((matches[0].score - 0.1).abs() < 1e-9);
    }

    #[test]
    fn empty_field_never_scores() {
        assert_eq!(field_score(&chars("mars"), &[]), None);
    }

    #[test]
    fn exact_title_match_scores_zero() {
        let index = ClaimIndex::build(vec![claim(1, "Mars is a planet", "")]);
        let matches = index.search("Mars is a planet");
        assert_eq!(matches.len(), 1);
        assert!(matches[0].score.abs() < f64::EPSILON);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let index = ClaimIndex::build(vec![claim(1, "Vaccines cause autism", "")]);
        assert_eq!(index.search("VACCINES CAUSE AUTISM").len(), 1);
    }

    #[test]
    fn blank_query_matches_nothing() {
        let index = ClaimIndex::build(vec![claim(1, "Mars is a planet", "")]);
        assert!(index.search("   ").is_empty());
    }

    #[test]
    fn late_match_is_penalized_by_offset() {
        let early = field_score(&chars("moon"), &chars("moon landing")).unwrap();
        let late = field_score(&chars("moon"), &chars("photos from the first moon landing")).unwrap();
        assert!(early < late);
    }

    #[test]
    fn match_in_both_fields_ranks_first() {
        let index = ClaimIndex::build(vec![
            claim(1, "The moon landing was staged", "Claims about studio sets"),
            claim(2, "The moon landing was staged", "Moon landing staged in a studio"),
        ]);
        let matches = index.search("moon landing staged");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].claim.id, 2);
    }
}
