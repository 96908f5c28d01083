use tone_config::ToneConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ToneConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ToneConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.remote.is_configured() && has_single_underscore_key(&env_keys, "TONE_REMOTE") {
        warnings.push(
            "Remote config appears default while TONE_REMOTE_* env vars exist. Use double underscores (example: TONE_REMOTE__API_KEY)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "TONE_GENERAL") {
        warnings.push(
            "TONE_GENERAL_* env vars are ignored. Use double underscores (example: TONE_GENERAL__INDUSTRY)."
                .to_string(),
        );
    }

    warnings
}

/// True when some key starts with `{section}_` but not `{section}__`.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use tone_config::{RemoteConfig, ToneConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &ToneConfig::default(),
            vec![
                ("TONE_REMOTE_API_KEY".to_string(), "hf_123".to_string()),
                ("TONE_GENERAL_INDUSTRY".to_string(), "government".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("TONE_REMOTE__API_KEY"));
    }

    #[test]
    fn double_underscore_keys_are_fine() {
        let warnings = collect_unconfigured_warnings(
            &ToneConfig::default(),
            vec![
                ("TONE_REMOTE__API_KEY".to_string(), "hf_123".to_string()),
                ("TONE_GENERAL__INDUSTRY".to_string(), "government".to_string()),
                ("TONE_LOG".to_string(), "debug".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn configured_remote_suppresses_remote_warning() {
        let config = ToneConfig {
            remote: RemoteConfig {
                enabled: true,
                api_key: "hf_123".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("TONE_REMOTE_ENABLED".to_string(), "true".to_string())],
        );

        assert!(warnings.is_empty());
    }
}
