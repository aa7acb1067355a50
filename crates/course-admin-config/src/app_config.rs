//! Application configuration
//!
//! Configuration loaded from `.course-admin.toml`, then overridden by
//! environment variables (optionally provided through a `.env` file).

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Environment variable overriding [`AppConfig::api_base_url`]
pub const ENV_API_URL: &str = "COURSE_ADMIN_API_URL";
/// Environment variable overriding [`AppConfig::offline`]
pub const ENV_OFFLINE: &str = "COURSE_ADMIN_OFFLINE";

/// Application configuration loaded from .course-admin.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the courses API (json-server compatible)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout of the HTTP client, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Serve the bundled sample catalog instead of calling the API
    #[serde(default)]
    pub offline: bool,
}

fn default_api_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            offline: false,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults.
    /// Environment variables take precedence over the file.
    pub fn load() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }

        let mut config = match crate::load_config_file() {
            Some(content) => Self::from_toml(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        };

        config.apply_env_overrides(|key| env::var(key).ok());
        config
    }

    /// Parse config content, falling back to defaults on malformed input
    pub fn from_toml(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }

    /// Apply overrides from a variable lookup (normally the process environment)
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            log::debug!("{} overrides api_base_url", ENV_API_URL);
            self.api_base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_OFFLINE) {
            match parse_flag(&raw) {
                Some(offline) => self.offline = offline,
                None => log::warn!("Ignoring {}={:?}: not a boolean", ENV_OFFLINE, raw),
            }
        }
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3001");
        assert_eq!(config.request_timeout_secs, 10);
        assert!(!config.offline);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config = AppConfig::from_toml(
            r#"
            api_base_url = "http://courses.internal:8080"
        "#,
        );
        assert_eq!(config.api_base_url, "http://courses.internal:8080");
        // Other fields should use defaults
        assert_eq!(config.request_timeout_secs, 10);
        assert!(!config.offline);
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let config = AppConfig::from_toml("offline = \"maybe");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = AppConfig::from_toml("offline = false");
        config.apply_env_overrides(env_of(&[
            (ENV_API_URL, " http://10.0.0.2:3001 "),
            (ENV_OFFLINE, "yes"),
        ]));
        assert_eq!(config.api_base_url, "http://10.0.0.2:3001");
        assert!(config.offline);
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(env_of(&[(ENV_API_URL, "  "), (ENV_OFFLINE, "sometimes")]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_request_timeout_is_never_zero() {
        let config = AppConfig {
            request_timeout_secs: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }
}
