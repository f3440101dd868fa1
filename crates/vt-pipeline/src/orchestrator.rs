//! Batch classification of an evidence set and reduction to a verdict.

use rand::{Rng, rngs::StdRng};
use serde::Serialize;
use vt_core::{AggregatedEvidence, EvidenceEntry, Label, LabelCounts, VerdictSummary};

use crate::classifier::Classifier;
use crate::error::ClassificationError;
use crate::shuffle::ShufflingCollector;

/// Result of one classification run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationOutcome {
    /// `None` when no entry was labeled agree or contradict.
    pub verdict: Option<VerdictSummary>,
    pub counts: LabelCounts,
    /// Entries labeled agree, shuffled.
    pub agreeing: Vec<EvidenceEntry>,
    /// Entries labeled contradict, shuffled.
    pub contradicting: Vec<EvidenceEntry>,
}

/// Pairs the claim with every evidence entry, submits the batch, and
/// attaches the returned labels.
pub struct PredictionOrchestrator<C, R = StdRng> {
    classifier: C,
    collector: ShufflingCollector<R>,
}

impl<C: Classifier> PredictionOrchestrator<C, StdRng> {
    /// Orchestrator shuffling with an OS-seeded generator.
    pub fn new(classifier: C) -> Self {
        Self::with_collector(classifier, ShufflingCollector::from_os_rng())
    }
}

impl<C: Classifier, R: Rng> PredictionOrchestrator<C, R> {
    pub const fn with_collector(classifier: C, collector: ShufflingCollector<R>) -> Self {
        Self {
            classifier,
            collector,
        }
    }

    pub const fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Classify every entry of `evidence` against `claim`.
    ///
    /// On success each entry's `prediction` is set. On failure no entry is
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError::NothingToClassify`] for a blank claim or
    /// an evidence set without entries (the service is not contacted), and
    /// any error from the classifier or from validating its predictions.
    pub async fn classify(
        &mut self,
        claim: &str,
        evidence: &mut AggregatedEvidence,
    ) -> Result<ClassificationOutcome, ClassificationError> {
        if claim.trim().is_empty() || evidence.entry_count() == 0 {
            return Err(ClassificationError::NothingToClassify);
        }

        let prompts: Vec<(String, String)> = evidence
            .entries()
            .map(|entry| (claim.to_string(), entry.prompt_source.clone()))
            .collect();

        let predictions = self.classifier.predict(&prompts).await?;
        let labels = decode_predictions(&predictions, prompts.len())?;

        let mut counts = LabelCounts::default();
        let mut agreeing = Vec::new();
        let mut contradicting = Vec::new();
        for (entry, label) in evidence.entries_mut().zip(labels) {
            entry.prediction = Some(label);
            counts.record(label);
            match label {
                Label::Agree => agreeing.push(entry.clone()),
                Label::Contradict => contradicting.push(entry.clone()),
                Label::Neutral => {}
            }
        }

        self.collector.shuffle(&mut agreeing);
        self.collector.shuffle(&mut contradicting);

        let verdict = VerdictSummary::from_counts(&counts).ok();
        match &verdict {
            Some(v) => tracing::info!(
                agree = counts.agree,
                neutral = counts.neutral,
                contradict = counts.contradict,
                dominant = %v.dominant,
                strength = v.strength,
                "claim classified"
            ),
            None => tracing::info!(
                neutral = counts.neutral,
                "claim classified without agreeing or contradicting evidence"
            ),
        }

        Ok(ClassificationOutcome {
            verdict,
            counts,
            agreeing,
            contradicting,
        })
    }
}

/// Validate the whole batch before anything is assigned.
fn decode_predictions(
    predictions: &[i64],
    expected: usize,
) -> Result<Vec<Label>, ClassificationError> {
    if predictions.len() < expected {
        return Err(ClassificationError::ShortPredictions {
            expected,
            received: predictions.len(),
        });
    }
    if predictions.len() > expected {
        tracing::debug!(
            expected,
            received = predictions.len(),
            "ignoring surplus predictions"
        );
    }

    predictions[..expected]
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            Label::from_wire(value).ok_or(ClassificationError::InvalidLabel { index, value })
        })
        .collect()
}
