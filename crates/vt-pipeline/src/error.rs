//! Pipeline error types.

use thiserror::Error;
use vt_core::RequestStatus;

use crate::session::RequestId;

/// The batch classification failed; no entry was labeled and no verdict
/// exists for this attempt.
#[derive(Debug, Error)]
pub enum ClassificationError {
    /// HTTP transport or body decoding error.
    #[error("classifier HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The classification service returned a non-success status code.
    #[error("classifier API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The service answered with `status: "error"`.
    #[error("classifier reported an error: {message}")]
    Service { message: String },

    /// The service answered `ok` without a predictions array.
    #[error("classifier response has no predictions")]
    MissingPredictions,

    /// Fewer predictions than submitted pairs.
    #[error("classifier returned {received} predictions for {expected} prompts")]
    ShortPredictions { expected: usize, received: usize },

    /// A prediction outside the label encoding `{0, 1, 2}`.
    #[error("classifier returned invalid label {value} at position {index}")]
    InvalidLabel { index: usize, value: i64 },

    /// No claim text or no evidence to pair it with.
    #[error("nothing to classify: a claim and at least one evidence entry are required")]
    NothingToClassify,
}

/// A session transition was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The transition belongs to a superseded request.
    #[error("stale response for request {id} (current request is {current})")]
    Stale { id: RequestId, current: RequestId },

    /// The transition is not valid from the current state.
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition {
        from: RequestStatus,
        to: RequestStatus,
    },
}

/// A [`crate::Verifier`] action could not complete.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Classification ran and failed; the evidence is still available.
    #[error("classification failed: {0}")]
    Classification(String),
}
