//! Google Fact Check Tools claim search client.

use async_trait::async_trait;
use serde::Deserialize;
use vt_core::{EvidenceEntry, ProviderId};

use crate::{Provider, error::ProviderError, http::read_json};

const BASE_URL: &str = "https://factchecktools.googleapis.com/v1alpha1/claims:search";

#[derive(Deserialize)]
struct ClaimSearchResponse {
    #[serde(default)]
    claims: Vec<FactCheckedClaim>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FactCheckedClaim {
    #[serde(default)]
    text: String,
    #[serde(default)]
    claim_review: Vec<ClaimReview>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClaimReview {
    url: Option<String>,
    title: Option<String>,
    textual_rating: Option<String>,
}

/// Client for the fact-check claim search endpoint.
pub struct FactCheckProvider {
    http: reqwest::Client,
    api_key: String,
    limit: usize,
}

impl FactCheckProvider {
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
impl Provider for FactCheckProvider {
    fn id(&self) -> ProviderId {
        ProviderId::FactCheck
    }

    async fn fetch(&self, query: &str) -> Result<Vec<EvidenceEntry>, ProviderError> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::MissingCredential {
                provider: self.id(),
            });
        }

        let url = format!(
            "{BASE_URL}?query={}&pageSize={}&key={}",
            urlencoding::encode(query),
            self.limit,
            urlencoding::encode(&self.api_key)
        );
        let data: ClaimSearchResponse = read_json(self.http.get(&url).send().await?).await?;
        Ok(normalize(data, self.limit))
    }
}

/// One entry per review; a claim reviewed by several publishers yields
/// several entries sharing the claim text as classifier input.
fn normalize(data: ClaimSearchResponse, limit: usize) -> Vec<EvidenceEntry> {
    data.claims
        .into_iter()
        .flat_map(|claim| {
            let text = claim.text;
            claim.claim_review.into_iter().filter_map(move |review| {
                let url = review.url?;
                let title = review
                    .title
                    .filter(|t| !t.trim().is_empty())
                    .or_else(|| {
                        review
                            .textual_rating
                            .as_ref()
                            .map(|rating| format!("{rating}: {text}"))
                    })
                    .unwrap_or_else(|| text.clone());
                Some(EvidenceEntry::with_prompt(title, url, text.clone()))
            })
        })
        .take(limit)
        .collect()
}
