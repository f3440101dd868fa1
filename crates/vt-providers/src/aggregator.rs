//! Concurrent fan-out over every configured provider.

use futures::future::join_all;
use vt_core::{AggregatedEvidence, ProviderSlot};

use crate::Provider;

/// Queries every provider concurrently and assembles one slot per provider.
pub struct ResourceAggregator {
    providers: Vec<Box<dyn Provider>>,
}

impl ResourceAggregator {
    /// Slots appear in the order `providers` are given.
    #[must_use]
    pub fn new(providers: Vec<Box<dyn Provider>>) -> Self {
        Self { providers }
    }

    /// Fetch evidence for `query` from all providers.
    ///
    /// Waits for every provider to settle. Individual provider failures are
    /// logged and become empty slots with the cause recorded; one failing
    /// provider never fails or reorders the others.
    pub async fn aggregate(&self, query: &str) -> AggregatedEvidence {
        let fetches = self.providers.iter().map(|provider| async move {
            let id = provider.id();
            (id, provider.fetch(query).await)
        });

        let slots = join_all(fetches)
            .await
            .into_iter()
            .map(|(provider, result)| match result {
                Ok(entries) => {
                    tracing::debug!(%provider, entries = entries.len(), "provider fetch succeeded");
                    ProviderSlot::new(provider, entries)
                }
                Err(e) => {
                    tracing::warn!(%provider, %e, "provider fetch failed");
                    ProviderSlot::failed(provider, e.to_string())
                }
            })
            .collect();

        AggregatedEvidence::new(query.to_string(), slots)
    }
}
