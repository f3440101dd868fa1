//! Provider identities, capabilities, classifier labels, and request statuses.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! [`RequestStatus`] provides `allowed_next_states()` to enforce valid
//! transitions in the verification session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// What kind of evidence a provider contributes.
///
/// Display code addresses slots through a capability rather than a position,
/// e.g. the news feed is every slot whose capability is [`Capability::News`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    FactCheck,
    WebSearch,
    Encyclopedia,
    News,
}

impl Capability {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FactCheck => "fact_check",
            Self::WebSearch => "web_search",
            Self::Encyclopedia => "encyclopedia",
            Self::News => "news",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProviderId
// ---------------------------------------------------------------------------

/// Identity of an external content provider.
///
/// The slot for a provider in [`crate::AggregatedEvidence`] is looked up by
/// this id, never by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderId {
    /// Google Fact Check Tools claim search.
    FactCheck,
    /// Bing web search.
    WebSearch,
    /// Wikipedia opensearch.
    Wikipedia,
    /// New York Times article search.
    NewYorkTimes,
    /// The Guardian content search.
    Guardian,
}

impl ProviderId {
    /// Every provider, in default slot order.
    pub const ALL: [Self; 5] = [
        Self::FactCheck,
        Self::WebSearch,
        Self::Wikipedia,
        Self::NewYorkTimes,
        Self::Guardian,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FactCheck => "fact_check",
            Self::WebSearch => "web_search",
            Self::Wikipedia => "wikipedia",
            Self::NewYorkTimes => "new_york_times",
            Self::Guardian => "guardian",
        }
    }

    /// Human-readable provider name for headings.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FactCheck => "Google Fact Check Tools",
            Self::WebSearch => "Web search",
            Self::Wikipedia => "Wikipedia",
            Self::NewYorkTimes => "The New York Times",
            Self::Guardian => "The Guardian",
        }
    }

    #[must_use]
    pub const fn capability(self) -> Capability {
        match self {
            Self::FactCheck => Capability::FactCheck,
            Self::WebSearch => Capability::WebSearch,
            Self::Wikipedia => Capability::Encyclopedia,
            Self::NewYorkTimes | Self::Guardian => Capability::News,
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::UnknownProvider(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// Three-way classifier output for one `(claim, evidence)` pair.
///
/// Encoded on the wire as `0` (contradict), `1` (neutral), `2` (agree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Contradict,
    Neutral,
    Agree,
}

impl Label {
    /// Decode the classifier's integer encoding.
    #[must_use]
    pub const fn from_wire(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Contradict),
            1 => Some(Self::Neutral),
            2 => Some(Self::Agree),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_wire(self) -> i64 {
        match self {
            Self::Contradict => 0,
            Self::Neutral => 1,
            Self::Agree => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contradict => "contradict",
            Self::Neutral => "neutral",
            Self::Agree => "agree",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// Lifecycle of one verification request.
///
/// ```text
/// idle → fetching_evidence → evidence_ready → classifying → verdict_ready
///                                                         → failed
/// ```
///
/// A new query may start from any state. A finished classification (either
/// outcome) may be re-run against the same evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Idle,
    FetchingEvidence,
    EvidenceReady,
    Classifying,
    VerdictReady,
    Failed,
}

impl RequestStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::FetchingEvidence],
            Self::FetchingEvidence => &[Self::FetchingEvidence, Self::EvidenceReady],
            Self::EvidenceReady | Self::VerdictReady | Self::Failed => {
                &[Self::FetchingEvidence, Self::Classifying]
            }
            Self::Classifying => &[Self::FetchingEvidence, Self::VerdictReady, Self::Failed],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::FetchingEvidence => "fetching_evidence",
            Self::EvidenceReady => "evidence_ready",
            Self::Classifying => "classifying",
            Self::VerdictReady => "verdict_ready",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Some(Label::Contradict))]
    #[case(1, Some(Label::Neutral))]
    #[case(2, Some(Label::Agree))]
    #[case(3, None)]
    #[case(-1, None)]
    fn label_wire_decoding(#[case] wire: i64, #[case] expected: Option<Label>) {
        assert_eq!(Label::from_wire(wire), expected);
    }

    #[test]
    fn label_wire_encoding_is_inverse() {
        for label in [Label::Contradict, Label::Neutral, Label::Agree] {
            assert_eq!(Label::from_wire(label.to_wire()), Some(label));
        }
    }

    #[test]
    fn provider_id_parses_own_names() {
        for id in ProviderId::ALL {
            assert_eq!(id.as_str().parse::<ProviderId>().unwrap(), id);
        }
        assert!("bing".parse::<ProviderId>().is_err());
    }

    #[test]
    fn news_providers_share_capability() {
        assert_eq!(ProviderId::NewYorkTimes.capability(), Capability::News);
        assert_eq!(ProviderId::Guardian.capability(), Capability::News);
        assert_eq!(ProviderId::Wikipedia.capability(), Capability::Encyclopedia);
    }

    #[test]
    fn provider_id_serializes_snake_case() {
        let json = serde_json::to_string(&ProviderId::NewYorkTimes).unwrap();
        assert_eq!(json, "\"new_york_times\"");
    }

    #[test]
    fn request_status_transitions() {
        assert!(RequestStatus::Idle.can_transition_to(RequestStatus::FetchingEvidence));
        assert!(!RequestStatus::Idle.can_transition_to(RequestStatus::Classifying));
        assert!(RequestStatus::EvidenceReady.can_transition_to(RequestStatus::Classifying));
        assert!(RequestStatus::Classifying.can_transition_to(RequestStatus::Failed));
        assert!(!RequestStatus::Classifying.can_transition_to(RequestStatus::EvidenceReady));
        assert!(RequestStatus::Failed.can_transition_to(RequestStatus::Classifying));
    }

    #[test]
    fn every_state_can_start_a_new_query() {
        for status in [
            RequestStatus::Idle,
            RequestStatus::FetchingEvidence,
            RequestStatus::EvidenceReady,
            RequestStatus::Classifying,
            RequestStatus::VerdictReady,
            RequestStatus::Failed,
        ] {
            assert!(status.can_transition_to(RequestStatus::FetchingEvidence), "{status}");
        }
    }
}
