//! Configuration management module

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::model::{Config, ShellType};
use crate::utils::path::{expand_tilde, normalize_path};

/// Load configuration, falling back to defaults when no file exists
pub fn load_or_create_config() -> Result<Config> {
    let config_path = Config::config_path();

    if config_path.exists() {
        Config::load().with_context(|| format!("Failed to load {}", config_path.display()))
    } else {
        Ok(Config::default())
    }
}

/// Resolve the primary profile path.
///
/// Priority: explicit `--file` > `profile.path` in config > shell default.
pub fn resolve_profile_path(
    explicit: Option<&Path>,
    config: &Config,
    shell_type: ShellType,
) -> PathBuf {
    if let Some(path) = explicit {
        return normalize_path(&path.to_string_lossy());
    }

    if let Some(path) = config.profile.path.as_deref().filter(|p| !p.is_empty()) {
        return expand_tilde(path);
    }

    shell_type.default_config_path()
}
