//! Cross-cutting error types for Verita.
//!
//! Domain-specific errors (e.g., `ProviderError`, `ClassificationError`) are
//! defined in their respective crates and converge in `vt-cli`.

use thiserror::Error;

/// Errors that can be raised by any Verita crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A provider name did not match any known provider.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}

/// No evidence was labeled agree or contradict, so no verdict can be stated.
///
/// This is a display-suppression condition, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no agreeing or contradicting evidence; verdict suppressed")]
pub struct DegenerateVerdict;
