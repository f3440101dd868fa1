use serde::Serialize;
use vt_config::VeritaConfig;
use vt_core::{Capability, ProviderId};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{self, Tabular};

#[derive(Debug, Serialize)]
struct ProviderRow {
    provider: ProviderId,
    name: &'static str,
    capability: Capability,
    enabled: bool,
    credential: &'static str,
}

impl Tabular for ProviderRow {
    const HEADERS: &'static [&'static str] = &["provider", "name", "capability", "enabled", "credential"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.provider.to_string(),
            self.name.to_string(),
            self.capability.to_string(),
            if self.enabled { "yes" } else { "no" }.to_string(),
            self.credential.to_string(),
        ]
    }
}

/// Handle `vt providers`.
pub fn handle(config: &VeritaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = provider_rows(config)?;
    match flags.format {
        OutputFormat::Table => {
            output::print_section("Providers", &rows);
            Ok(())
        }
        format => output::output(&rows, format),
    }
}

fn provider_rows(config: &VeritaConfig) -> anyhow::Result<Vec<ProviderRow>> {
    let enabled = config.enabled_providers()?;
    Ok(ProviderId::ALL
        .iter()
        .map(|&id| ProviderRow {
            provider: id,
            name: id.display_name(),
            capability: id.capability(),
            enabled: enabled.contains(&id),
            credential: if config.providers.credential(id).is_none() {
                "not needed"
            } else if config.providers.is_configured(id) {
                "ok"
            } else {
                "missing key"
            },
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vt_config::VeritaConfig;

    use super::provider_rows;

    #[test]
    fn lists_every_provider_with_credential_status() {
        let mut config = VeritaConfig::default();
        config.providers.enabled = vec!["guardian".into(), "wikipedia".into()];
        config.providers.guardian_key = "test".into();

        let rows = provider_rows(&config).unwrap();
        let summary: Vec<(String, bool, &str)> = rows
            .iter()
            .map(|r| (r.provider.to_string(), r.enabled, r.credential))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("fact_check".to_string(), false, "missing key"),
                ("web_search".to_string(), false, "missing key"),
                ("wikipedia".to_string(), true, "not needed"),
                ("new_york_times".to_string(), false, "missing key"),
                ("guardian".to_string(), true, "ok"),
            ]
        );
    }
}
