//! Previously recorded claims from the local corpus and their search matches.

use serde::{Deserialize, Serialize};

/// A claim stored in the local corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalClaim {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A corpus claim matched against a query. Lower score is a closer match;
/// `0.0` is exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatch {
    pub claim: LocalClaim,
    pub score: f64,
}
