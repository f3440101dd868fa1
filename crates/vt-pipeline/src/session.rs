//! Per-session request state machine.
//!
//! Every query gets a fresh [`RequestId`]. Async results are delivered with
//! the id they were started under; a result whose id is no longer current
//! belongs to a superseded request and is rejected as [`SessionError::Stale`].

use std::fmt;

use serde::Serialize;
use vt_core::{AggregatedEvidence, RequestStatus, SimilarityMatch};

use crate::error::{ClassificationError, SessionError};
use crate::orchestrator::ClassificationOutcome;

/// Monotonically increasing request identifier, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Evidence and corpus matches gathered for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Gathered {
    pub evidence: AggregatedEvidence,
    pub matches: Vec<SimilarityMatch>,
}

/// Session state with the data each state owns.
#[derive(Debug, Clone)]
pub enum RequestState {
    Idle,
    FetchingEvidence {
        id: RequestId,
        query: String,
    },
    EvidenceReady {
        id: RequestId,
        gathered: Gathered,
    },
    Classifying {
        id: RequestId,
        gathered: Gathered,
    },
    VerdictReady {
        id: RequestId,
        gathered: Gathered,
        outcome: ClassificationOutcome,
    },
    Failed {
        id: RequestId,
        gathered: Gathered,
        message: String,
    },
}

impl RequestState {
    #[must_use]
    pub const fn status(&self) -> RequestStatus {
        match self {
            Self::Idle => RequestStatus::Idle,
            Self::FetchingEvidence { .. } => RequestStatus::FetchingEvidence,
            Self::EvidenceReady { .. } => RequestStatus::EvidenceReady,
            Self::Classifying { .. } => RequestStatus::Classifying,
            Self::VerdictReady { .. } => RequestStatus::VerdictReady,
            Self::Failed { .. } => RequestStatus::Failed,
        }
    }

    const fn gathered(&self) -> Option<&Gathered> {
        match self {
            Self::Idle | Self::FetchingEvidence { .. } => None,
            Self::EvidenceReady { gathered, .. }
            | Self::Classifying { gathered, .. }
            | Self::VerdictReady { gathered, .. }
            | Self::Failed { gathered, .. } => Some(gathered),
        }
    }
}

/// One user's sequence of verification requests.
#[derive(Debug)]
pub struct VerificationSession {
    state: RequestState,
    current: RequestId,
}

impl Default for VerificationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationSession {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RequestState::Idle,
            current: RequestId(0),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &RequestState {
        &self.state
    }

    #[must_use]
    pub const fn status(&self) -> RequestStatus {
        self.state.status()
    }

    #[must_use]
    pub const fn current_id(&self) -> RequestId {
        self.current
    }

    /// Query of the current request, if one was started.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match &self.state {
            RequestState::Idle => None,
            RequestState::FetchingEvidence { query, .. } => Some(query),
            _ => self.state.gathered().map(|g| g.evidence.query.as_str()),
        }
    }

    #[must_use]
    pub fn evidence(&self) -> Option<&AggregatedEvidence> {
        self.state.gathered().map(|g| &g.evidence)
    }

    #[must_use]
    pub fn matches(&self) -> Option<&[SimilarityMatch]> {
        self.state.gathered().map(|g| g.matches.as_slice())
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<&ClassificationOutcome> {
        match &self.state {
            RequestState::VerdictReady { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    /// Failure message of the last classification attempt.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Start a new request. Allowed from any state; whatever the previous
    /// request held is dropped.
    pub fn begin_query(&mut self, query: impl Into<String>) -> RequestId {
        self.current = RequestId(self.current.0 + 1);
        let query = query.into();
        tracing::debug!(id = %self.current, query = %query, "request started");
        self.state = RequestState::FetchingEvidence {
            id: self.current,
            query,
        };
        self.current
    }

    /// Deliver the evidence gathered for request `id`.
    ///
    /// # Errors
    ///
    /// [`SessionError::Stale`] if `id` was superseded,
    /// [`SessionError::InvalidTransition`] if the request is not fetching.
    pub fn evidence_ready(
        &mut self,
        id: RequestId,
        evidence: AggregatedEvidence,
        matches: Vec<SimilarityMatch>,
    ) -> Result<(), SessionError> {
        self.check_current(id)?;
        self.check_transition(RequestStatus::EvidenceReady)?;
        self.state = RequestState::EvidenceReady {
            id,
            gathered: Gathered { evidence, matches },
        };
        Ok(())
    }

    /// Start classifying the current evidence, keeping it in place.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidTransition`] unless the session holds evidence
    /// and is not already classifying.
    pub fn begin_classification(&mut self) -> Result<RequestId, SessionError> {
        self.check_transition(RequestStatus::Classifying)?;
        let state = std::mem::replace(&mut self.state, RequestState::Idle);
        self.state = match state {
            RequestState::EvidenceReady { id, gathered }
            | RequestState::VerdictReady { id, gathered, .. }
            | RequestState::Failed { id, gathered, .. } => {
                RequestState::Classifying { id, gathered }
            }
            other => other,
        };
        Ok(self.current)
    }

    /// Mutable evidence of an in-flight classification, for labeling.
    pub fn classifying_evidence_mut(&mut self) -> Option<&mut AggregatedEvidence> {
        match &mut self.state {
            RequestState::Classifying { gathered, .. } => Some(&mut gathered.evidence),
            _ => None,
        }
    }

    /// Deliver the classification result for request `id`. A failure keeps
    /// the evidence untouched.
    ///
    /// # Errors
    ///
    /// [`SessionError::Stale`] if `id` was superseded,
    /// [`SessionError::InvalidTransition`] if no classification is running.
    pub fn classification_finished(
        &mut self,
        id: RequestId,
        result: Result<ClassificationOutcome, ClassificationError>,
    ) -> Result<(), SessionError> {
        self.check_current(id)?;
        let (id, gathered) = match std::mem::replace(&mut self.state, RequestState::Idle) {
            RequestState::Classifying { id, gathered } => (id, gathered),
            other => {
                let from = other.status();
                self.state = other;
                return Err(SessionError::InvalidTransition {
                    from,
                    to: if result.is_ok() {
                        RequestStatus::VerdictReady
                    } else {
                        RequestStatus::Failed
                    },
                });
            }
        };
        self.state = match result {
            Ok(outcome) => RequestState::VerdictReady {
                id,
                gathered,
                outcome,
            },
            Err(e) => RequestState::Failed {
                id,
                gathered,
                message: e.to_string(),
            },
        };
        Ok(())
    }

    fn check_current(&self, id: RequestId) -> Result<(), SessionError> {
        if id == self.current {
            Ok(())
        } else {
            tracing::debug!(%id, current = %self.current, "discarding stale response");
            Err(SessionError::Stale {
                id,
                current: self.current,
            })
        }
    }

    fn check_transition(&self, to: RequestStatus) -> Result<(), SessionError> {
        let from = self.status();
        let needs_evidence = to == RequestStatus::Classifying;
        if from.can_transition_to(to) && (!needs_evidence || self.evidence().is_some()) {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition { from, to })
        }
    }
}
