//! # vt-pipeline
//!
//! Everything between raw provider evidence and a verdict:
//!
//! - [`ShufflingCollector`]: flatten provider slots into one random feed
//! - [`Paginator`]: fixed-size page window over a feed
//! - [`Classifier`] / [`HttpClassifier`]: batch claim/evidence labeling
//! - [`PredictionOrchestrator`]: label an evidence set and reduce the labels
//!   to a [`vt_core::VerdictSummary`]
//! - [`VerificationSession`]: per-request state machine guarding against
//!   stale async results
//! - [`Verifier`]: one session wired to an aggregator, index, and classifier

pub mod classifier;
pub mod orchestrator;
pub mod paginator;
pub mod session;
pub mod shuffle;
pub mod verifier;

mod error;

pub use classifier::{Classifier, HttpClassifier};
pub use error::{ClassificationError, SessionError, VerifyError};
pub use orchestrator::{ClassificationOutcome, PredictionOrchestrator};
pub use paginator::{PageWindow, Paginator};
pub use session::{Gathered, RequestId, RequestState, VerificationSession};
pub use shuffle::ShufflingCollector;
pub use verifier::Verifier;
