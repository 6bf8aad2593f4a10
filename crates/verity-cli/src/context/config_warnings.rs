use verity_config::{DEFAULT_API_BASE, VerityConfig};

/// Emit warnings for env vars that look like config but were not applied.
pub fn warn_unconfigured(config: &VerityConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &VerityConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    for (section, example) in [
        ("API", "VERITY_API__BASE_URL"),
        ("HISTORY", "VERITY_HISTORY__CAPACITY"),
        ("SHARE", "VERITY_SHARE__PAGE_URL"),
    ] {
        let single = format!("VERITY_{section}_");
        let double = format!("VERITY_{section}__");
        if env_keys
            .iter()
            .any(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            warnings.push(format!(
                "VERITY_{section}_* env vars are ignored. Use double underscores (example: {example})."
            ));
        }
    }

    if config.api.base_url == DEFAULT_API_BASE && env_keys.iter().any(|key| key == "VITE_API_URL") {
        warnings.push(
            "VITE_API_URL is set but not read; the backend is still the default. Set VERITY_API__BASE_URL instead."
                .to_string(),
        );
    }

    warnings
}
