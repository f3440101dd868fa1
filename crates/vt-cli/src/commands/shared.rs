//! Row views and steps shared by several commands.

use serde::Serialize;
use vt_core::{Capability, EvidenceEntry, ProviderId, SimilarityMatch};
use vt_pipeline::VerificationSession;

use crate::context::AppContext;
use crate::output::Tabular;
use crate::progress::Spinner;

/// Run the evidence search for `query` behind a spinner.
pub async fn gather(ctx: &mut AppContext, query: &str) -> anyhow::Result<()> {
    let spinner = Spinner::start("Gathering evidence");
    match ctx.verifier.search(query).await {
        Ok(_) => {
            spinner.finish();
            Ok(())
        }
        Err(error) => {
            spinner.fail("evidence search failed");
            Err(error.into())
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SlotRow {
    pub provider: ProviderId,
    pub capability: Capability,
    pub entries: usize,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Tabular for SlotRow {
    const HEADERS: &'static [&'static str] = &["provider", "capability", "entries", "status", "error"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.provider.to_string(),
            self.capability.to_string(),
            self.entries.to_string(),
            self.status.to_string(),
            self.error.clone().unwrap_or_else(|| "-".into()),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct EntryRow {
    pub provider: ProviderId,
    pub title: String,
    pub url: String,
}

impl Tabular for EntryRow {
    const HEADERS: &'static [&'static str] = &["provider", "title", "url"];

    fn cells(&self) -> Vec<String> {
        vec![self.provider.to_string(), self.title.clone(), self.url.clone()]
    }
}

#[derive(Debug, Serialize)]
pub struct FeedRow {
    pub title: String,
    pub url: String,
}

impl From<&EvidenceEntry> for FeedRow {
    fn from(entry: &EvidenceEntry) -> Self {
        Self {
            title: entry.title.clone(),
            url: entry.url.clone(),
        }
    }
}

impl Tabular for FeedRow {
    const HEADERS: &'static [&'static str] = &["title", "url"];

    fn cells(&self) -> Vec<String> {
        vec![self.title.clone(), self.url.clone()]
    }
}

#[derive(Debug, Serialize)]
pub struct MatchRow {
    pub id: i64,
    pub score: f64,
    pub title: String,
    pub description: String,
}

impl From<&SimilarityMatch> for MatchRow {
    fn from(m: &SimilarityMatch) -> Self {
        Self {
            id: m.claim.id,
            score: m.score,
            title: m.claim.title.clone(),
            description: m.claim.description.clone(),
        }
    }
}

impl Tabular for MatchRow {
    const HEADERS: &'static [&'static str] = &["id", "score", "title", "description"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            format!("{:.3}", self.score),
            self.title.clone(),
            self.description.clone(),
        ]
    }
}

/// Per-provider slot summary of the session's evidence.
pub fn slot_rows(session: &VerificationSession) -> Vec<SlotRow> {
    session
        .evidence()
        .map(|evidence| {
            evidence
                .slots()
                .iter()
                .map(|slot| SlotRow {
                    provider: slot.provider,
                    capability: slot.provider.capability(),
                    entries: slot.len(),
                    status: if slot.is_failed() { "failed" } else { "ok" },
                    error: slot.error.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Every evidence entry, slot order.
pub fn entry_rows(session: &VerificationSession) -> Vec<EntryRow> {
    session
        .evidence()
        .map(|evidence| {
            evidence
                .slots()
                .iter()
                .flat_map(|slot| {
                    slot.entries.iter().map(|entry| EntryRow {
                        provider: slot.provider,
                        title: entry.title.clone(),
                        url: entry.url.clone(),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn match_rows(session: &VerificationSession) -> Vec<MatchRow> {
    session
        .matches()
        .map(|matches| matches.iter().map(MatchRow::from).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vt_core::{AggregatedEvidence, ProviderSlot};

    use super::*;

    fn session() -> VerificationSession {
        let mut session = VerificationSession::new();
        let id = session.begin_query("Mars is a planet");
        session
            .evidence_ready(
                id,
                AggregatedEvidence::new(
                    "Mars is a planet".into(),
                    vec![
                        ProviderSlot::new(
                            ProviderId::Wikipedia,
                            vec![EvidenceEntry::new("Mars", "https://en.wikipedia.org/wiki/Mars")],
                        ),
                        ProviderSlot::failed(ProviderId::Guardian, "rate limited, retry after 60s"),
                    ],
                ),
                Vec::new(),
            )
            .unwrap();
        session
    }

    #[test]
    fn slot_rows_report_failures() {
        let rows = slot_rows(&session());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].status, "ok");
        assert_eq!(rows[1].status, "failed");
        assert_eq!(
            rows[1].cells()[4],
            "rate limited, retry after 60s".to_string()
        );
    }

    #[test]
    fn entry_rows_carry_their_provider() {
        let rows = entry_rows(&session());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells(), vec!["wikipedia", "Mars", "https://en.wikipedia.org/wiki/Mars"]);
    }

    #[test]
    fn empty_session_has_no_rows() {
        let session = VerificationSession::new();
        assert!(slot_rows(&session).is_empty());
        assert!(entry_rows(&session).is_empty());
        assert!(match_rows(&session).is_empty());
    }
}
