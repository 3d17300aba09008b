//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub list: ListConfig,
}

/// UI configuration options
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UiConfig {
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            language: default_language(),
        }
    }
}

/// Primary shell profile selection
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ProfileConfig {
    /// Explicit profile path; `~` is expanded. Shell default when unset.
    pub path: Option<String>,
}

/// `list` command display options
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListConfig {
    #[serde(default = "default_max_value_width")]
    pub max_value_width: usize,
}

fn default_max_value_width() -> usize {
    100
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            max_value_width: default_max_value_width(),
        }
    }
}

impl Config {
    /// Get the configkeys configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("configkeys")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, or return default if file doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }
}
