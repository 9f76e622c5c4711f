//! Configuration Management
//!
//! Persistent client settings stored as JSON in the user's config directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default API origin
pub const DEFAULT_ORIGIN: &str = "https://api.sparkpost.com:443";

/// Default API version
pub const DEFAULT_API_VERSION: &str = "v1";

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV: &str = "SPARKPOST_API_KEY";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// API key sent in the Authorization header
    #[serde(default)]
    pub api_key: Option<String>,
    /// API origin, e.g. `https://api.eu.sparkpost.com:443`
    #[serde(default)]
    pub origin: Option<String>,
    /// API version path segment
    #[serde(default)]
    pub api_version: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sparkpost").join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`; a missing or invalid file yields defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid config file {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;

        Ok(())
    }

    /// Get effective API key (explicit > config > environment)
    pub fn effective_api_key(&self) -> Option<String> {
        Self::pick_api_key(self.api_key.as_deref(), std::env::var(API_KEY_ENV).ok())
    }

    /// First non-empty key of `explicit` and `env`
    fn pick_api_key(explicit: Option<&str>, env: Option<String>) -> Option<String> {
        explicit
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .or_else(|| env.filter(|k| !k.is_empty()))
    }

    /// Get effective origin
    pub fn effective_origin(&self) -> String {
        self.origin
            .clone()
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string())
    }

    /// Get effective API version
    pub fn effective_api_version(&self) -> String {
        self.api_version
            .clone()
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("sparkpost-config-test-{}-{}", std::process::id(), name))
            .join("config.json")
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.effective_origin(), "https://api.sparkpost.com:443");
        assert_eq!(config.effective_api_version(), "v1");
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let config = Config {
            api_key: Some("explicit".to_string()),
            ..Config::default()
        };
        assert_eq!(config.effective_api_key().as_deref(), Some("explicit"));
    }

    #[test]
    fn test_pick_api_key_prefers_explicit() {
        assert_eq!(
            Config::pick_api_key(Some("explicit"), Some("env".to_string())).as_deref(),
            Some("explicit")
        );
    }

    #[test]
    fn test_empty_explicit_key_falls_back_to_env() {
        assert_eq!(
            Config::pick_api_key(Some(""), Some("env".to_string())).as_deref(),
            Some("env")
        );
        assert_eq!(Config::pick_api_key(None, Some("env".to_string())).as_deref(), Some("env"));
    }

    #[test]
    fn test_no_usable_key() {
        assert_eq!(Config::pick_api_key(Some(""), None), None);
        assert_eq!(Config::pick_api_key(None, Some(String::new())), None);
        assert_eq!(Config::pick_api_key(None, None), None);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = temp_config_path("missing");
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("roundtrip");
        let config = Config {
            api_key: Some("abc123".to_string()),
            origin: Some("https://api.eu.sparkpost.com:443".to_string()),
            api_version: None,
        };

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        assert_eq!(loaded, config);
        assert_eq!(loaded.effective_api_version(), "v1");
    }

    #[test]
    fn test_invalid_file_yields_defaults() {
        let path = temp_config_path("invalid");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();

        let loaded = Config::load_from(&path);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        assert_eq!(loaded, Config::default());
    }
}
