//! Evidence provider configuration.

use serde::{Deserialize, Serialize};
use vt_core::ProviderId;

const fn default_limit() -> usize {
    10
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_enabled() -> Vec<String> {
    ProviderId::ALL
        .iter()
        .map(|id| id.as_str().to_string())
        .collect()
}

fn default_wikipedia_language() -> String {
    String::from("en")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProvidersConfig {
    /// Maximum entries kept per provider.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Providers to query, in slot order.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<String>,

    /// Google Fact Check Tools API key.
    #[serde(default)]
    pub fact_check_key: String,

    /// Bing Web Search subscription key.
    #[serde(default)]
    pub web_search_key: String,

    /// New York Times Article Search API key.
    #[serde(default)]
    pub nyt_key: String,

    /// Guardian Open Platform API key.
    #[serde(default)]
    pub guardian_key: String,

    /// Wikipedia language subdomain (e.g. `en`, `de`).
    #[serde(default = "default_wikipedia_language")]
    pub wikipedia_language: String,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            timeout_secs: default_timeout_secs(),
            enabled: default_enabled(),
            fact_check_key: String::new(),
            web_search_key: String::new(),
            nyt_key: String::new(),
            guardian_key: String::new(),
            wikipedia_language: default_wikipedia_language(),
        }
    }
}

impl ProvidersConfig {
    /// Credential configured for `provider`, if it needs one.
    ///
    /// Returns `None` for providers that take no credential.
    #[must_use]
    pub fn credential(&self, provider: ProviderId) -> Option<&str> {
        match provider {
            ProviderId::FactCheck => Some(&self.fact_check_key),
            ProviderId::WebSearch => Some(&self.web_search_key),
            ProviderId::NewYorkTimes => Some(&self.nyt_key),
            ProviderId::Guardian => Some(&self.guardian_key),
            ProviderId::Wikipedia => None,
        }
    }

    /// Whether `provider` has everything it needs to issue requests.
    #[must_use]
    pub fn is_configured(&self, provider: ProviderId) -> bool {
        self.credential(provider)
            .is_none_or(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_every_provider() {
        let config = ProvidersConfig::default();
        assert_eq!(config.enabled.len(), ProviderId::ALL.len());
        assert_eq!(config.enabled[0], "fact_check");
        assert_eq!(config.limit, 10);
        assert_eq!(config.wikipedia_language, "en");
    }

    #[test]
    fn keyless_provider_is_always_configured() {
        let config = ProvidersConfig::default();
        assert!(config.is_configured(ProviderId::Wikipedia));
        assert!(!config.is_configured(ProviderId::FactCheck));
        assert!(!config.is_configured(ProviderId::Guardian));
    }

    #[test]
    fn blank_key_is_not_configured() {
        let config = ProvidersConfig {
            nyt_key: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured(ProviderId::NewYorkTimes));
    }
}
