//! Configuration module for PromptHub

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable consulted for the Unsplash access key
pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Unsplash API access key (Client-ID). Absent means photo fetching is
    /// disabled: every query behaves as "no photo available".
    #[serde(default)]
    pub unsplash_access_key: Option<String>,

    /// App name used for attribution UTM parameters
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Per-request timeout for photo searches, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Query debounce delay for photo acquisition, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Default derived image width
    #[serde(default = "default_image_width")]
    pub image_width: u32,

    /// Default derived image height
    #[serde(default = "default_image_height")]
    pub image_height: u32,
}

fn default_app_name() -> String {
    "PromptHub".to_string()
}

fn default_request_timeout_secs() -> u64 {
    5
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_image_width() -> u32 {
    800
}

fn default_image_height() -> u32 {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unsplash_access_key: None,
            app_name: default_app_name(),
            request_timeout_secs: default_request_timeout_secs(),
            debounce_ms: default_debounce_ms(),
            image_width: default_image_width(),
            image_height: default_image_height(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("prompthub");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the default path or create default.
    ///
    /// The `UNSPLASH_ACCESS_KEY` environment variable overrides the access
    /// key from the file.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        let mut config = Self::load_from(&path)?;
        if let Ok(key) = std::env::var(ACCESS_KEY_ENV)
            && !key.trim().is_empty()
        {
            config.unsplash_access_key = Some(key);
        }
        Ok(config)
    }

    /// Load config from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        self.save_to(&path)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.unsplash_access_key.is_none());
        assert_eq!(config.app_name, "PromptHub");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.image_width, 800);
        assert_eq!(config.image_height, 500);
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            unsplash_access_key: Some("test-key".to_string()),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.unsplash_access_key.as_deref(), Some("test-key"));
        assert_eq!(loaded.image_width, 800);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let config = Config::load_from(&path).unwrap();
        assert!(config.unsplash_access_key.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "unsplash_access_key = \"abc\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.unsplash_access_key.as_deref(), Some("abc"));
        assert_eq!(config.debounce_ms, 300);
    }
}
