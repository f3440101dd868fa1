//! Classification service configuration.

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    String::from("http://127.0.0.1:8000/predictions")
}

/// Default classifier request timeout.
const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Endpoint accepting `{"prompts": [[claim, evidence], ...]}`.
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClassifierConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.url.starts_with("http://") || self.url.starts_with("https://")
    }
}
