//! One user's verification workflow: gather, browse, classify.

use std::num::NonZeroUsize;
use std::sync::Arc;

use rand::rngs::StdRng;
use vt_core::{Capability, EvidenceEntry};
use vt_providers::ResourceAggregator;
use vt_search::ClaimIndex;

use crate::classifier::Classifier;
use crate::error::{ClassificationError, VerifyError};
use crate::orchestrator::{ClassificationOutcome, PredictionOrchestrator};
use crate::paginator::Paginator;
use crate::session::{RequestId, VerificationSession};
use crate::shuffle::ShufflingCollector;

/// Owns every collaborator for one session and sequences them.
pub struct Verifier<C> {
    aggregator: ResourceAggregator,
    index: Arc<ClaimIndex>,
    orchestrator: PredictionOrchestrator<C, StdRng>,
    feed: ShufflingCollector<StdRng>,
    session: VerificationSession,
}

impl<C: Classifier> Verifier<C> {
    pub fn new(aggregator: ResourceAggregator, index: ClaimIndex, classifier: C) -> Self {
        Self::with_collectors(
            aggregator,
            index,
            PredictionOrchestrator::new(classifier),
            ShufflingCollector::from_os_rng(),
        )
    }

    /// Deterministic shuffling for both the news feed and the verdict buckets.
    pub fn seeded(
        aggregator: ResourceAggregator,
        index: ClaimIndex,
        classifier: C,
        seed: u64,
    ) -> Self {
        Self::with_collectors(
            aggregator,
            index,
            PredictionOrchestrator::with_collector(classifier, ShufflingCollector::seeded(seed)),
            ShufflingCollector::seeded(seed.wrapping_add(1)),
        )
    }

    fn with_collectors(
        aggregator: ResourceAggregator,
        index: ClaimIndex,
        orchestrator: PredictionOrchestrator<C, StdRng>,
        feed: ShufflingCollector<StdRng>,
    ) -> Self {
        Self {
            aggregator,
            index: Arc::new(index),
            orchestrator,
            feed,
            session: VerificationSession::new(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &VerificationSession {
        &self.session
    }

    #[must_use]
    pub fn index(&self) -> &ClaimIndex {
        &self.index
    }

    /// Swap in an index rebuilt from a changed corpus.
    pub fn replace_index(&mut self, index: ClaimIndex) {
        self.index = Arc::new(index);
    }

    /// Start a request for `query`: provider aggregation and the corpus
    /// search run concurrently, and both results land in the session.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Session`] if the session rejects the evidence.
    pub async fn search(&mut self, query: &str) -> Result<RequestId, VerifyError> {
        let id = self.session.begin_query(query);

        let index = Arc::clone(&self.index);
        let owned = query.to_string();
        let (evidence, matches) = tokio::join!(
            self.aggregator.aggregate(query),
            tokio::task::spawn_blocking(move || index.search(&owned)),
        );
        let matches = matches.unwrap_or_else(|e| {
            tracing::warn!(%e, "claim index search task failed");
            Vec::new()
        });

        tracing::debug!(
            %id,
            entries = evidence.entry_count(),
            failed = evidence.failed_providers().len(),
            matches = matches.len(),
            "evidence gathered"
        );
        self.session.evidence_ready(id, evidence, matches)?;
        Ok(id)
    }

    /// Shuffled, paginated feed of every news slot of the current evidence.
    /// Each call draws a fresh ordering.
    pub fn news_feed(&mut self, page_size: NonZeroUsize) -> Paginator<EvidenceEntry> {
        let items: Vec<EvidenceEntry> = match self.session.evidence() {
            Some(evidence) => {
                let groups: Vec<&[EvidenceEntry]> = evidence
                    .by_capability(Capability::News)
                    .into_iter()
                    .map(|slot| slot.entries.as_slice())
                    .collect();
                self.feed.flatten(&groups)
            }
            None => Vec::new(),
        };
        Paginator::new(items, page_size)
    }

    /// Classify the current evidence against the current query.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Session`] when there is no evidence to
    /// classify, and [`VerifyError::Classification`] when classification
    /// failed; the evidence then stays in the session unchanged.
    pub async fn classify(&mut self) -> Result<&ClassificationOutcome, VerifyError> {
        let id = self.session.begin_classification()?;
        let claim = self.session.query().unwrap_or_default().to_string();

        let result = match self.session.classifying_evidence_mut() {
            Some(evidence) => self.orchestrator.classify(&claim, evidence).await,
            None => Err(ClassificationError::NothingToClassify),
        };
        if let Err(e) = &result {
            tracing::warn!(%id, %e, "classification failed");
        }
        self.session.classification_finished(id, result)?;

        self.session.outcome().ok_or_else(|| {
            VerifyError::Classification(self.session.failure().unwrap_or_default().to_string())
        })
    }
}
