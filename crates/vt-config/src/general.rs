//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default page size for paginated evidence lists.
const fn default_page_size() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Entries per page in paginated evidence lists (e.g. the news feed).
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Path to the local claim corpus (one JSON claim per line).
    #[serde(default)]
    pub corpus_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            corpus_path: String::new(),
        }
    }
}

impl GeneralConfig {
    /// Whether a local claim corpus is configured.
    #[must_use]
    pub fn has_corpus(&self) -> bool {
        !self.corpus_path.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.page_size, 5);
        assert!(!config.has_corpus());
    }
}
