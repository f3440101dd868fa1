//! Guardian Open Platform content search client.

use async_trait::async_trait;
use serde::Deserialize;
use vt_core::{EvidenceEntry, ProviderId};

use crate::{Provider, error::ProviderError, http::read_json};

const BASE_URL: &str = "https://content.guardianapis.com/search";

#[derive(Deserialize)]
struct ContentSearchResponse {
    response: ContentSearchBody,
}

#[derive(Deserialize)]
struct ContentSearchBody {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    results: Vec<ContentItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentItem {
    web_title: String,
    web_url: String,
}

pub struct GuardianProvider {
    http: reqwest::Client,
    api_key: String,
    limit: usize,
}

impl GuardianProvider {
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
impl Provider for GuardianProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Guardian
    }

    async fn fetch(&self, query: &str) -> Result<Vec<EvidenceEntry>, ProviderError> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::MissingCredential {
                provider: self.id(),
            });
        }

        let url = format!(
            "{BASE_URL}?q={}&page-size={}&api-key={}",
            urlencoding::encode(query),
            self.limit,
            urlencoding::encode(&self.api_key)
        );
        let data: ContentSearchResponse = read_json(self.http.get(&url).send().await?).await?;
        normalize(data, self.limit)
    }
}

/// The API reports some failures inside a 200 body (`status: "error"`).
fn normalize(data: ContentSearchResponse, limit: usize) -> Result<Vec<EvidenceEntry>, ProviderError> {
    let body = data.response;
    if body.status == "error" {
        return Err(ProviderError::Api {
            status: 200,
            message: body.message.unwrap_or_default(),
        });
    }
    Ok(body
        .results
        .into_iter()
        .take(limit)
        .map(|item| EvidenceEntry::new(item.web_title, item.web_url))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "response": {
            "status": "ok",
            "userTier": "developer",
            "total": 2,
            "results": [
                {
                    "id": "science/2026/mar/01/mars",
                    "sectionName": "Science",
                    "webTitle": "Mars once had oceans, study finds",
                    "webUrl": "https://www.theguardian.com/science/2026/mar/01/mars"
                },
                {
                    "id": "science/2026/mar/02/rover",
                    "webTitle": "Rover spots ancient riverbed",
                    "webUrl": "https://www.theguardian.com/science/2026/mar/02/rover"
                }
            ]
        }
    }"#;

    #[test]
    fn maps_results_to_entries() {
        let data: ContentSearchResponse = serde_json::from_str(FIXTURE).unwrap();
        let entries = normalize(data, 10).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Mars once had oceans, study finds");
        assert_eq!(entries[0].prompt_source, entries[0].title);
    }

    #[test]
    fn error_status_in_body_is_api_error() {
        let data: ContentSearchResponse = serde_json::from_str(
            r#"{"response": {"status": "error", "message": "The api-key provided is invalid"}}"#,
        )
        .unwrap();
        let err = normalize(data, 10).unwrap_err();
        assert!(matches!(err, ProviderError::Api { status: 200, .. }));
    }
}
