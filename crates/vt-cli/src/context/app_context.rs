use std::num::NonZeroUsize;

use anyhow::Context;
use vt_config::VeritaConfig;
use vt_pipeline::{HttpClassifier, Verifier};
use vt_search::{ClaimIndex, ClaimSource, JsonlClaimSource};

use crate::cli::GlobalFlags;

/// Everything a command needs, built once per invocation.
pub struct AppContext {
    pub config: VeritaConfig,
    pub verifier: Verifier<HttpClassifier>,
}

impl AppContext {
    pub fn init(config: VeritaConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let ids = config.enabled_providers()?;
        let providers = vt_providers::build_providers(&config.providers, &ids)
            .context("failed to build provider clients")?;
        let aggregator = vt_providers::ResourceAggregator::new(providers);

        let corpus = flags
            .corpus
            .as_deref()
            .unwrap_or(config.general.corpus_path.as_str());
        let index = load_index(corpus)?;

        let classifier =
            HttpClassifier::new(&config.classifier).context("failed to build classifier client")?;

        Ok(Self {
            verifier: Verifier::new(aggregator, index, classifier),
            config,
        })
    }

    /// Configured page size; validation guarantees it is non-zero.
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.config.general.page_size).unwrap_or(NonZeroUsize::MIN)
    }
}

fn load_index(corpus: &str) -> anyhow::Result<ClaimIndex> {
    if corpus.trim().is_empty() {
        tracing::debug!("no claim corpus configured; similarity search is empty");
        return Ok(ClaimIndex::build(Vec::new()));
    }

    let claims = JsonlClaimSource::new(corpus)
        .load_claims()
        .with_context(|| format!("failed to load claim corpus {corpus}"))?;
    Ok(ClaimIndex::build(claims))
}
