//! Wikipedia opensearch client. Needs no credential.

use async_trait::async_trait;
use vt_core::{EvidenceEntry, ProviderId};

use crate::{Provider, error::ProviderError, http::read_json};

/// `[query, titles, descriptions, urls]`
type OpenSearchResponse = (String, Vec<String>, Vec<String>, Vec<String>);

pub struct WikipediaProvider {
    http: reqwest::Client,
    language: String,
    limit: usize,
}

impl WikipediaProvider {
    #[must_use]
    pub const fn new(http: reqwest::Client, language: String, limit: usize) -> Self {
        Self {
            http,
            language,
            limit,
        }
    }

    fn endpoint(&self) -> String {
        let language = self.language.trim();
        let language = if language.is_empty() { "en" } else { language };
        format!("https://{language}.wikipedia.org/w/api.php")
    }
}

#[async_trait]
impl Provider for WikipediaProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Wikipedia
    }

    async fn fetch(&self, query: &str) -> Result<Vec<EvidenceEntry>, ProviderError> {
        let url = format!(
            "{}?action=opensearch&search={}&limit={}&namespace=0&format=json",
            self.endpoint(),
            urlencoding::encode(query),
            self.limit
        );
        let data: OpenSearchResponse = read_json(self.http.get(&url).send().await?).await?;
        Ok(normalize(data, self.limit))
    }
}

fn normalize(data: OpenSearchResponse, limit: usize) -> Vec<EvidenceEntry> {
    let (_, titles, descriptions, urls) = data;
    titles
        .into_iter()
        .zip(urls)
        .enumerate()
        .take(limit)
        .map(|(idx, (title, url))| {
            let description = descriptions.get(idx).cloned().unwrap_or_default();
            EvidenceEntry::with_prompt(title, url, description)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"[
        "Mars",
        ["Mars", "Mars 2020", "Mars (mythology)"],
        ["", "", "Roman god of war"],
        [
            "https://en.wikipedia.org/wiki/Mars",
            "https://en.wikipedia.org/wiki/Mars_2020",
            "https://en.wikipedia.org/wiki/Mars_(mythology)"
        ]
    ]"#;

    #[test]
    fn zips_titles_and_urls() {
        let data: OpenSearchResponse = serde_json::from_str(FIXTURE).unwrap();
        let entries = normalize(data, 10);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].title, "Mars 2020");
        assert_eq!(entries[1].url, "https://en.wikipedia.org/wiki/Mars_2020");
        assert_eq!(entries[0].prompt_source, "Mars");
        assert_eq!(entries[2].prompt_source, "Roman god of war");
    }

    #[test]
    fn missing_descriptions_fall_back_to_titles() {
        let data: OpenSearchResponse =
            serde_json::from_str(r#"["x", ["A"], [], ["https://w.example/A"]]"#).unwrap();
        let entries = normalize(data, 10);
        assert_eq!(entries[0].prompt_source, "A");
    }

    #[test]
    fn blank_language_uses_english() {
        let provider = WikipediaProvider::new(reqwest::Client::new(), " ".into(), 3);
        assert_eq!(provider.endpoint(), "https://en.wikipedia.org/w/api.php");
    }
}
