// Configuration loader
// Loads API keys from ~/.tern/config.toml or environment variables

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;
use crate::router::PolicyKind;

/// Load configuration: `~/.tern/config.toml` wins if present, otherwise the
/// `GEMINI_API_KEY` / `SERPER_API_KEY` / `WEATHER_API_KEY` environment
/// variables. Missing keys are not an error; the turn that needs an absent
/// credential reports it.
pub fn load_config() -> Result<Config> {
    let config_path = dirs::home_dir().map(|home| home.join(".tern/config.toml"));
    load_config_from(config_path.as_deref())
}

/// Load from an explicit config file path. A present file wins wholesale over
/// the environment; an absent path (or no path at all) falls back to the
/// environment variables.
pub fn load_config_from(config_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            return config_from_toml(&contents)
                .with_context(|| format!("Failed to parse {}", path.display()));
        }
    }

    let config = config_from_env();
    if config.has_no_keys() {
        tracing::warn!(
            "no API keys configured; create ~/.tern/config.toml or set \
             GEMINI_API_KEY / SERPER_API_KEY / WEATHER_API_KEY"
        );
    }
    Ok(config)
}

/// Parse the TOML config format. All fields optional:
///
/// ```toml
/// gemini_api_key = "..."
/// serper_api_key = "..."
/// weather_api_key = "..."
/// policy = "broad"
/// log_dir = "/var/log/tern"
/// ```
pub fn config_from_toml(contents: &str) -> Result<Config> {
    #[derive(serde::Deserialize)]
    struct TomlConfig {
        #[serde(default)]
        gemini_api_key: Option<String>,
        #[serde(default)]
        serper_api_key: Option<String>,
        #[serde(default)]
        weather_api_key: Option<String>,
        #[serde(default)]
        policy: Option<PolicyKind>,
        #[serde(default)]
        log_dir: Option<PathBuf>,
    }

    let toml_config: TomlConfig = toml::from_str(contents)?;

    Ok(Config {
        gemini_api_key: toml_config.gemini_api_key,
        serper_api_key: toml_config.serper_api_key,
        weather_api_key: toml_config.weather_api_key,
        policy: toml_config.policy.unwrap_or_default(),
        log_dir: toml_config.log_dir.unwrap_or_else(Config::default_log_dir),
    })
}

fn config_from_env() -> Config {
    Config {
        gemini_api_key: non_empty_var("GEMINI_API_KEY"),
        serper_api_key: non_empty_var("SERPER_API_KEY"),
        weather_api_key: non_empty_var("WEATHER_API_KEY"),
        ..Config::default()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_toml() {
        let config = config_from_toml(
            r#"
            gemini_api_key = "g-key"
            serper_api_key = "s-key"
            weather_api_key = "w-key"
            policy = "broad"
            log_dir = "/tmp/tern-logs"
            "#,
        )
        .unwrap();
        assert_eq!(config.gemini_api_key.as_deref(), Some("g-key"));
        assert_eq!(config.serper_api_key.as_deref(), Some("s-key"));
        assert_eq!(config.weather_api_key.as_deref(), Some("w-key"));
        assert_eq!(config.policy, PolicyKind::Broad);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/tern-logs"));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = config_from_toml("").unwrap();
        assert!(config.has_no_keys());
        assert_eq!(config.policy, PolicyKind::Strict);
    }

    #[test]
    fn test_bad_policy_value_is_an_error() {
        assert!(config_from_toml(r#"policy = "fuzzy""#).is_err());
    }

    #[test]
    fn test_partial_keys() {
        let config = config_from_toml(r#"serper_api_key = "s-key""#).unwrap();
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.serper_api_key.as_deref(), Some("s-key"));
        assert!(config.weather_api_key.is_none());
    }

    // The env tests mutate process-wide state, so they serialize on a lock.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn set_env_keys() {
        std::env::set_var("GEMINI_API_KEY", "env-g");
        std::env::set_var("SERPER_API_KEY", "env-s");
        std::env::set_var("WEATHER_API_KEY", "env-w");
    }

    fn clear_env_keys() {
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("SERPER_API_KEY");
        std::env::remove_var("WEATHER_API_KEY");
    }

    #[test]
    fn test_env_keys_used_when_file_missing() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_env_keys();

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        let config = load_config_from(Some(&missing)).unwrap();

        clear_env_keys();

        assert_eq!(config.gemini_api_key.as_deref(), Some("env-g"));
        assert_eq!(config.serper_api_key.as_deref(), Some("env-s"));
        assert_eq!(config.weather_api_key.as_deref(), Some("env-w"));
        assert_eq!(config.policy, PolicyKind::Strict);
    }

    #[test]
    fn test_config_file_wins_over_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_env_keys();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, r#"gemini_api_key = "file-g""#).unwrap();
        let config = load_config_from(Some(&path)).unwrap();

        clear_env_keys();

        // The file's value wins, and the file wins wholesale: keys it does
        // not set stay unset even though the environment has them.
        assert_eq!(config.gemini_api_key.as_deref(), Some("file-g"));
        assert!(config.serper_api_key.is_none());
        assert!(config.weather_api_key.is_none());
    }

    #[test]
    fn test_no_path_falls_back_to_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_keys();
        std::env::set_var("SERPER_API_KEY", "env-only");

        let config = load_config_from(None).unwrap();

        clear_env_keys();

        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.serper_api_key.as_deref(), Some("env-only"));
    }
}
