//! New York Times Article Search client.

use async_trait::async_trait;
use serde::Deserialize;
use vt_core::{EvidenceEntry, ProviderId};

use crate::{Provider, error::ProviderError, http::read_json};

const BASE_URL: &str = "https://api.nytimes.com/svc/search/v2/articlesearch.json";

#[derive(Deserialize)]
struct ArticleSearchResponse {
    response: Option<ArticleSearchBody>,
}

#[derive(Deserialize)]
struct ArticleSearchBody {
    #[serde(default)]
    docs: Vec<Article>,
}

#[derive(Deserialize)]
struct Article {
    web_url: String,
    #[serde(default, rename = "abstract")]
    summary: String,
    headline: Option<Headline>,
}

#[derive(Deserialize)]
struct Headline {
    #[serde(default)]
    main: String,
}

pub struct NytProvider {
    http: reqwest::Client,
    api_key: String,
    limit: usize,
}

impl NytProvider {
    #[must_use]
    pub const fn new(http: reqwest::Client, api_key: String, limit: usize) -> Self {
        Self {
            http,
            api_key,
            limit,
        }
    }
}

#[async_trait]
impl Provider for NytProvider {
    fn id(&self) -> ProviderId {
        ProviderId::NewYorkTimes
    }

    async fn fetch(&self, query: &str) -> Result<Vec<EvidenceEntry>, ProviderError> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::MissingCredential {
                provider: self.id(),
            });
        }

        // The API has a fixed page size of 10; `limit` truncates locally.
        let url = format!(
            "{BASE_URL}?q={}&api-key={}",
            urlencoding::encode(query),
            urlencoding::encode(&self.api_key)
        );
        let data: ArticleSearchResponse = read_json(self.http.get(&url).send().await?).await?;
        Ok(normalize(data, self.limit))
    }
}

fn normalize(data: ArticleSearchResponse, limit: usize) -> Vec<EvidenceEntry> {
    data.response
        .map(|body| body.docs)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|article| {
            let headline = article.headline.map(|h| h.main).unwrap_or_default();
            let title = if headline.trim().is_empty() {
                article.summary.clone()
            } else {
                headline
            };
            (!title.trim().is_empty())
                .then(|| EvidenceEntry::with_prompt(title, article.web_url, article.summary))
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "status": "OK",
        "copyright": "Copyright (c) 2026 The New York Times Company.",
        "response": {
            "docs": [
                {
                    "abstract": "The red planet keeps surprising scientists.",
                    "web_url": "https://www.nytimes.com/2026/01/01/science/mars.html",
                    "headline": {"main": "What We Learned About Mars This Year", "kicker": null}
                },
                {
                    "abstract": "",
                    "web_url": "https://www.nytimes.com/2026/02/02/science/rover.html",
                    "headline": {"main": "A Rover's Long Goodbye"}
                },
                {
                    "abstract": "",
                    "web_url": "https://www.nytimes.com/untitled.html",
                    "headline": {"main": ""}
                }
            ],
            "meta": {"hits": 3, "offset": 0}
        }
    }"#;

    #[test]
    fn abstract_is_prompt_source() {
        let data: ArticleSearchResponse = serde_json::from_str(FIXTURE).unwrap();
        let entries = normalize(data, 10);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "What We Learned About Mars This Year");
        assert_eq!(
            entries[0].prompt_source,
            "The red planet keeps surprising scientists."
        );
        assert_eq!(entries[1].prompt_source, "A Rover's Long Goodbye");
    }

    #[test]
    fn fault_response_without_body_is_empty() {
        let data: ArticleSearchResponse =
            serde_json::from_str(r#"{"fault": {"faultstring": "Invalid ApiKey"}}"#).unwrap();
        assert!(normalize(data, 10).is_empty());
    }
}
