//! Ranking behavior of the claim index over a small realistic corpus.

use pretty_assertions::assert_eq;
use rstest::rstest;
use vt_core::LocalClaim;
use vt_search::{ClaimIndex, ClaimSource, RELEVANCE_THRESHOLD, StaticClaims};

fn corpus() -> Vec<LocalClaim> {
    [
        (1, "Mars is a planet", "The fourth planet from the Sun"),
        (2, "Pluto is a planet", "Reclassified as a dwarf planet in 2006"),
        (3, "The Great Wall of China is visible from space", "A popular myth about orbit photos"),
        (4, "Drinking water helps with headaches", "Dehydration as a headache trigger"),
        (5, "Bats are blind", "Most bat species can see"),
    ]
    .into_iter()
    .map(|(id, title, description)| LocalClaim {
        id,
        title: title.into(),
        description: description.into(),
    })
    .collect()
}

fn index() -> ClaimIndex {
    ClaimIndex::build(StaticClaims(corpus()).load_claims().unwrap())
}

#[rstest]
#[case("Mars is a planet", 1)]
#[case("Pluto is a planet", 2)]
#[case("The Great Wall of China is visible from space", 3)]
#[case("Most bat species can see", 5)]
#[case("Dehydration as a headache trigger", 4)]
fn exact_field_query_ranks_its_claim_first(#[case] query: &str, #[case] expected_id: i64) {
    let matches = index().search(query);
    assert!(!matches.is_empty());
    assert_eq!(matches[0].claim.id, expected_id);
    assert!(matches.iter().all(|m| m.score >= matches[0].score));
}

#[test]
fn unrelated_query_matches_nothing() {
    assert!(index().search("quarterly tax filing deadline").is_empty());
}

#[test]
fn results_are_ascending_and_within_threshold() {
    let matches = index().search("is a planet");
    assert!(matches.len() >= 2);
    for pair in matches.windows(2) {
        assert!(pair[0].score <= pair[1].score);
    }
    assert!(matches.iter().all(|m| m.score <= RELEVANCE_THRESHOLD));
}

#[test]
fn typo_still_matches() {
    let matches = index().search("Mars is a planot");
    assert_eq!(matches.first().map(|m| m.claim.id), Some(1));
}

#[test]
fn rebuilt_index_sees_new_claims() {
    let mut claims = corpus();
    let before = ClaimIndex::build(claims.clone());
    assert!(before.search("Venus has no moons").is_empty());

    claims.push(LocalClaim {
        id: 6,
        title: "Venus has no moons".into(),
        description: String::new(),
    });
    let after = ClaimIndex::build(claims);
    assert_eq!(after.len(), 6);
    assert_eq!(after.search("Venus has no moons")[0].claim.id, 6);
}
