//! Shell detection utilities

use crate::model::ShellType;
use std::path::Path;

/// Detect shell type from a profile file name
pub fn detect_from_file(path: &Path) -> Option<ShellType> {
    let filename = path.file_name().and_then(|n| n.to_str())?;

    if filename.contains("zsh") || filename.contains("zprofile") {
        return Some(ShellType::Zsh);
    }
    if filename.contains("bashrc") || filename.contains("bash_profile") {
        return Some(ShellType::Bash);
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("zsh") => Some(ShellType::Zsh),
        Some(ext) if ext.eq_ignore_ascii_case("bash") => Some(ShellType::Bash),
        _ => None,
    }
}

/// Get the appropriate shell type for the current context
pub fn get_shell_type(specified: Option<ShellType>, file_path: Option<&Path>) -> ShellType {
    // Priority: specified > file detection > $SHELL > zsh
    if let Some(shell) = specified {
        return shell;
    }

    if let Some(shell) = file_path.and_then(detect_from_file) {
        return shell;
    }

    ShellType::detect().unwrap_or(ShellType::Zsh)
}
