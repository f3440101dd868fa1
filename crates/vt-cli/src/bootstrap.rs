use anyhow::Context;
use vt_config::VeritaConfig;

/// Load `.env` (if present) and the layered configuration.
pub fn load_config() -> anyhow::Result<VeritaConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded dotenv file"),
        Err(error) if error.not_found() => {}
        Err(error) => return Err(error).context("failed to load .env file"),
    }

    VeritaConfig::load().context("failed to load verita configuration")
}
