// Configuration structs

use crate::router::PolicyKind;
use std::path::PathBuf;

/// Process configuration: provider credentials, routing policy, log location.
///
/// Every API key is independently optional; a missing key only fails the
/// turns that need that provider.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini completion API key.
    pub gemini_api_key: Option<String>,

    /// Serper web search API key.
    pub serper_api_key: Option<String>,

    /// WeatherAPI.com key.
    pub weather_api_key: Option<String>,

    /// Which keyword routing policy variant to use.
    pub policy: PolicyKind,

    /// Base directory for conversation logs.
    pub log_dir: PathBuf,
}

impl Config {
    pub fn default_log_dir() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(".tern"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// True when no provider credential is configured at all.
    pub fn has_no_keys(&self) -> bool {
        self.gemini_api_key.is_none()
            && self.serper_api_key.is_none()
            && self.weather_api_key.is_none()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            serper_api_key: None,
            weather_api_key: None,
            policy: PolicyKind::default(),
            log_dir: Self::default_log_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_strict() {
        assert_eq!(Config::default().policy, PolicyKind::Strict);
    }

    #[test]
    fn test_has_no_keys() {
        let mut config = Config::default();
        assert!(config.has_no_keys());
        config.serper_api_key = Some("k".to_string());
        assert!(!config.has_no_keys());
    }
}
