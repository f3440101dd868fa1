//! Provider error types.

use thiserror::Error;
use vt_core::ProviderId;

/// Errors a single provider can produce for one query.
///
/// The aggregator never propagates these; a failed provider becomes an empty
/// slot with the error message recorded.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP transport or body decoding error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The provider needs an API credential that is not configured.
    #[error("no API credential configured for {provider}")]
    MissingCredential {
        /// Provider lacking the credential.
        provider: ProviderId,
    },
}
