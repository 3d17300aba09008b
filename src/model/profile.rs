//! Shell profile file status

use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::OffsetDateTime;

/// Location and filesystem status of a shell profile
#[derive(Debug, Clone)]
pub struct ProfileStatus {
    pub path: PathBuf,
    pub exists: bool,
    pub size: Option<u64>,
    pub modified: Option<OffsetDateTime>,
}

impl ProfileStatus {
    /// Stat a profile path. Missing files and unreadable metadata are reported
    /// as absent fields, never as errors.
    pub fn inspect(path: &Path) -> Self {
        let metadata = std::fs::metadata(path).ok().filter(|m| m.is_file());
        let size = metadata.as_ref().map(|m| m.len());
        let modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .map(OffsetDateTime::from);

        Self {
            path: path.to_path_buf(),
            exists: metadata.is_some(),
            size,
            modified,
        }
    }

    /// Last modification time as `YYYY-MM-DD HH:MM:SS UTC`
    pub fn modified_display(&self) -> Option<String> {
        let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
        self.modified
            .and_then(|t| t.to_offset(time::UtcOffset::UTC).format(&format).ok())
            .map(|s| format!("{} UTC", s))
    }
}
