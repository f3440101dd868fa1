//! # vt-config
//!
//! Layered configuration loading for Verita using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERITA_*` prefix, `__` as separator)
//! 2. Project-level `.verita/config.toml`
//! 3. User-level `~/.config/verita/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VERITA_PROVIDERS__NYT_KEY` -> `providers.nyt_key`,
//! `VERITA_CLASSIFIER__URL` -> `classifier.url`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use vt_config::VeritaConfig;
//!
//! let config = VeritaConfig::load_with_dotenv().expect("config");
//! for provider in config.enabled_providers().expect("provider names") {
//!     println!("{provider}: configured={}", config.providers.is_configured(provider));
//! }
//! ```

mod classifier;
mod error;
mod general;
mod providers;

pub use classifier::ClassifierConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use providers::ProvidersConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vt_core::ProviderId;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VeritaConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl VeritaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".verita/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("VERITA_").split("__"))
    }

    /// Reject values the pipeline cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero page size, a zero
    /// provider limit, or an unknown provider name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.page_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.providers.limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "providers.limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        self.enabled_providers().map(|_| ())
    }

    /// Enabled providers in configured slot order, duplicates removed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a name is not a known provider.
    pub fn enabled_providers(&self) -> Result<Vec<ProviderId>, ConfigError> {
        let mut ids = Vec::with_capacity(self.providers.enabled.len());
        for name in &self.providers.enabled {
            let id = name
                .trim()
                .parse::<ProviderId>()
                .map_err(|error| ConfigError::InvalidValue {
                    field: "providers.enabled".into(),
                    reason: error.to_string(),
                })?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("verita").join("config.toml"))
    }
}
