//! Bing Web Search client.

use async_trait::async_trait;
use serde::Deserialize;
use vt_core::{EvidenceEntry, ProviderId};

use crate::{Provider, error::ProviderError, http::read_json};

const BASE_URL: &str = "https://api.bing.microsoft.com/v7.0/search";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    web_pages: Option<WebPages>,
}

#[derive(Deserialize)]
struct WebPages {
    #[serde(default)]
    value: Vec<WebPage>,
}

#[derive(Deserialize)]
struct WebPage {
    name: String,
    url: String,
    #[serde(default)]
    snippet: String,
}

pub struct WebSearchProvider {
    http: reqwest::Client,
    subscription_key: String,
    limit: usize,
}

impl WebSearchProvider {
    #[must_use]
    pub const fn new(http: reqwest::Client, subscription_key: String, limit: usize) -> Self {
        Self {
            http,
            subscription_key,
            limit,
        }
    }
}

#[async_trait]
impl Provider for WebSearchProvider {
    fn id(&self) -> ProviderId {
        ProviderId::WebSearch
    }

    async fn fetch(&self, query: &str) -> Result<Vec<EvidenceEntry>, ProviderError> {
        if self.subscription_key.trim().is_empty() {
            return Err(ProviderError::MissingCredential {
                provider: self.id(),
            });
        }

        let url = format!(
            "{BASE_URL}?q={}&count={}&responseFilter=Webpages",
            urlencoding::encode(query),
            self.limit
        );
        let resp = self
            .http
            .get(&url)
            .header("Ocp-Apim-Subscription-Key", &self.subscription_key)
            .send()
            .await?;
        let data: SearchResponse = read_json(resp).await?;
        Ok(normalize(data, self.limit))
    }
}

fn normalize(data: SearchResponse, limit: usize) -> Vec<EvidenceEntry> {
    data.web_pages
        .map(|pages| pages.value)
        .unwrap_or_default()
        .into_iter()
        .take(limit)
        .map(|page| EvidenceEntry::with_prompt(page.name, page.url, page.snippet))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "_type": "SearchResponse",
        "queryContext": {"originalQuery": "Mars is a planet"},
        "webPages": {
            "totalEstimatedMatches": 2,
            "value": [
                {
                    "id": "https://api.bing.microsoft.com/api/v7/#WebPages.0",
                    "name": "Mars - NASA Science",
                    "url": "https://science.nasa.gov/mars/",
                    "snippet": "Mars is the fourth planet from the Sun."
                },
                {
                    "name": "Mars - Wikipedia",
                    "url": "https://en.wikipedia.org/wiki/Mars"
                }
            ]
        }
    }"#;

    #[test]
    fn snippet_becomes_prompt_source() {
        let data: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        let entries = normalize(data, 10);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Mars - NASA Science");
        assert_eq!(entries[0].prompt_source, "Mars is the fourth planet from the Sun.");
        assert_eq!(entries[1].prompt_source, "Mars - Wikipedia");
    }

    #[test]
    fn response_without_web_pages_is_empty() {
        let data: SearchResponse =
            serde_json::from_str(r#"{"_type": "SearchResponse", "rankingResponse": {}}"#).unwrap();
        assert!(normalize(data, 10).is_empty());
    }
}
