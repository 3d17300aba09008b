//! Shell type detection and profile paths

use std::env;
use std::path::PathBuf;

use crate::utils::path::home_path;

/// Supported shell types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Zsh,
    Bash,
}

/// Startup files a user may keep exports in, in the order they are reported
pub const CANDIDATE_PROFILES: [&str; 3] = [".zshrc", ".bash_profile", ".bashrc"];

impl ShellType {
    /// Detect shell type from `$SHELL`
    pub fn detect() -> Option<Self> {
        let shell = env::var("SHELL").ok()?;
        Self::from_shell_path(&shell)
    }

    /// Classify a login shell path such as `/bin/zsh`
    pub fn from_shell_path(shell: &str) -> Option<Self> {
        let name = shell.rsplit('/').next().unwrap_or(shell);
        if name.contains("zsh") {
            Some(ShellType::Zsh)
        } else if name.contains("bash") {
            Some(ShellType::Bash)
        } else {
            None
        }
    }

    /// Get the default profile path for this shell
    pub fn default_config_path(&self) -> PathBuf {
        match self {
            ShellType::Zsh => home_path(".zshrc"),
            ShellType::Bash => home_path(".bashrc"),
        }
    }

    /// Get shell name as string
    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Zsh => "zsh",
            ShellType::Bash => "bash",
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
