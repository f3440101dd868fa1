//! # vt-providers
//!
//! Evidence provider HTTP clients for Verita.
//!
//! Each provider turns a free-text claim query into normalized
//! [`EvidenceEntry`] values:
//! - Google Fact Check Tools (fact-check reviews)
//! - Bing Web Search
//! - Wikipedia opensearch
//! - New York Times Article Search
//! - The Guardian content search
//!
//! [`ResourceAggregator`] queries all configured providers concurrently and
//! returns one slot per provider, in configured order.

pub mod aggregator;
pub mod fact_check;
pub mod guardian;
pub mod nyt;
pub mod web_search;
pub mod wikipedia;

mod error;
mod http;

pub use aggregator::ResourceAggregator;
pub use error::ProviderError;

use std::time::Duration;

use async_trait::async_trait;
use vt_config::ProvidersConfig;
use vt_core::{EvidenceEntry, ProviderId};

use crate::{
    fact_check::FactCheckProvider, guardian::GuardianProvider, nyt::NytProvider,
    web_search::WebSearchProvider, wikipedia::WikipediaProvider,
};

// ── Provider ───────────────────────────────────────────────────────

/// One external content source.
///
/// Implementations issue exactly one request per [`Provider::fetch`] and do
/// not retry.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Identity of the slot this provider fills.
    fn id(&self) -> ProviderId;

    /// Fetch and normalize evidence for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the credential is missing, the HTTP
    /// request fails, the provider returns a non-success status, or the
    /// response cannot be parsed.
    async fn fetch(&self, query: &str) -> Result<Vec<EvidenceEntry>, ProviderError>;
}

// ── Construction ───────────────────────────────────────────────────

/// Build a provider client for each id, sharing one HTTP client.
///
/// Providers without a configured credential are still built; they fail at
/// fetch time so their slot stays present (and empty) in the aggregate.
///
/// # Errors
///
/// Returns [`ProviderError::Http`] if the HTTP client cannot be built.
pub fn build_providers(
    config: &ProvidersConfig,
    ids: &[ProviderId],
) -> Result<Vec<Box<dyn Provider>>, ProviderError> {
    let http = http::build_client(Duration::from_secs(config.timeout_secs))?;
    let limit = config.limit;

    Ok(ids
        .iter()
        .map(|id| -> Box<dyn Provider> {
            match id {
                ProviderId::FactCheck => Box::new(FactCheckProvider::new(
                    http.clone(),
                    config.fact_check_key.clone(),
                    limit,
                )),
                ProviderId::WebSearch => Box::new(WebSearchProvider::new(
                    http.clone(),
                    config.web_search_key.clone(),
                    limit,
                )),
                ProviderId::Wikipedia => Box::new(WikipediaProvider::new(
                    http.clone(),
                    config.wikipedia_language.clone(),
                    limit,
                )),
                ProviderId::NewYorkTimes => {
                    Box::new(NytProvider::new(http.clone(), config.nyt_key.clone(), limit))
                }
                ProviderId::Guardian => Box::new(GuardianProvider::new(
                    http.clone(),
                    config.guardian_key.clone(),
                    limit,
                )),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_providers_in_requested_order() {
        let ids = [
            ProviderId::Guardian,
            ProviderId::FactCheck,
            ProviderId::Wikipedia,
        ];
        let providers = build_providers(&ProvidersConfig::default(), &ids).unwrap();
        let built: Vec<ProviderId> = providers.iter().map(|p| p.id()).collect();
        assert_eq!(built, ids.to_vec());
    }

    #[tokio::test]
    async fn unconfigured_providers_fail_into_empty_slots() {
        let ids = [ProviderId::FactCheck, ProviderId::NewYorkTimes];
        let providers = build_providers(&ProvidersConfig::default(), &ids).unwrap();
        let evidence = ResourceAggregator::new(providers).aggregate("Mars").await;

        assert_eq!(evidence.len(), 2);
        assert_eq!(
            evidence.failed_providers(),
            vec![ProviderId::FactCheck, ProviderId::NewYorkTimes]
        );
        assert_eq!(evidence.entry_count(), 0);
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_wikipedia_search() {
        let providers =
            build_providers(&ProvidersConfig::default(), &[ProviderId::Wikipedia]).unwrap();
        let evidence = ResourceAggregator::new(providers).aggregate("Mars").await;
        for entry in evidence.entries() {
            println!("  {} | {}", entry.title, entry.url);
        }
        assert!(evidence.failed_providers().is_empty());
    }
}
