use vt_config::VeritaConfig;
use vt_core::ProviderId;

pub fn warn_unconfigured(config: &VeritaConfig) {
    for warning in collect_unconfigured_warnings(config) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings(config: &VeritaConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    for id in config.enabled_providers().unwrap_or_default() {
        if let Some(var) = credential_env_var(id)
            && !config.providers.is_configured(id)
        {
            warnings.push(format!(
                "{} is enabled but has no API key; its results will be empty. Set {var}.",
                id.display_name(),
            ));
        }
    }

    if !config.classifier.is_configured() {
        warnings.push(format!(
            "classifier.url '{}' is not an http(s) URL; `vt check` will fail. Set VERITA_CLASSIFIER__URL.",
            config.classifier.url
        ));
    }

    warnings
}

const fn credential_env_var(id: ProviderId) -> Option<&'static str> {
    match id {
        ProviderId::FactCheck => Some("VERITA_PROVIDERS__FACT_CHECK_KEY"),
        ProviderId::WebSearch => Some("VERITA_PROVIDERS__WEB_SEARCH_KEY"),
        ProviderId::NewYorkTimes => Some("VERITA_PROVIDERS__NYT_KEY"),
        ProviderId::Guardian => Some("VERITA_PROVIDERS__GUARDIAN_KEY"),
        ProviderId::Wikipedia => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vt_config::VeritaConfig;

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_each_keyless_provider() {
        let config = VeritaConfig::default();
        let warnings = collect_unconfigured_warnings(&config);

        // Every provider but Wikipedia needs a key.
        assert_eq!(warnings.len(), 4);
        assert!(warnings.iter().any(|w| w.contains("VERITA_PROVIDERS__NYT_KEY")));
    }

    #[test]
    fn no_warnings_when_configured() {
        let mut config = VeritaConfig::default();
        config.providers.fact_check_key = "fc".into();
        config.providers.web_search_key = "ws".into();
        config.providers.nyt_key = "nyt".into();
        config.providers.guardian_key = "g".into();

        assert!(collect_unconfigured_warnings(&config).is_empty());
    }

    #[test]
    fn disabled_providers_are_not_reported() {
        let mut config = VeritaConfig::default();
        config.providers.enabled = vec!["wikipedia".into()];
        assert!(collect_unconfigured_warnings(&config).is_empty());
    }

    #[test]
    fn bad_classifier_url_is_reported() {
        let mut config = VeritaConfig::default();
        config.providers.enabled = vec!["wikipedia".into()];
        config.classifier.url = "localhost:8000".into();

        let warnings = collect_unconfigured_warnings(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("VERITA_CLASSIFIER__URL"));
    }
}
