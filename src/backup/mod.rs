//! Single-slot profile backups
//!
//! Each mutation first copies the profile to `<profile>.backup`, replacing
//! whatever backup was there. There is no history.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{PatchError, PatchResult};

/// Suffix appended to the profile file name
pub const BACKUP_SUFFIX: &str = ".backup";

/// Backup location for a profile: `~/.zshrc` -> `~/.zshrc.backup`
pub fn backup_path(source_file: &Path) -> PathBuf {
    let mut name: OsString = source_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("profile"));
    name.push(BACKUP_SUFFIX);
    source_file.with_file_name(name)
}

/// Copy the profile to its backup location.
///
/// Returns `Ok(None)` when there is nothing to back up.
pub fn create_backup(source_file: &Path) -> PatchResult<Option<PathBuf>> {
    if !source_file.exists() {
        return Ok(None);
    }

    let target = backup_path(source_file);
    std::fs::copy(source_file, &target).map_err(|source| PatchError::Backup {
        path: target.clone(),
        source,
    })?;

    Ok(Some(target))
}
