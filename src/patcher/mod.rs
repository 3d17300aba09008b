//! Export line patching for shell profiles
//!
//! Every mutation is a full read-modify-write of the profile:
//!
//! 1. Read the file as lines, each keeping its own terminator
//! 2. Copy it to `<profile>.backup` (best-effort)
//! 3. Drop every `export NAME=` line for the variable
//! 4. For additions, append the marker comment once and the new line
//! 5. Write the whole sequence back
//!
//! The line transformations ([`apply_add`], [`apply_remove`]) are pure so the
//! rules can be exercised without a filesystem.

use std::path::PathBuf;

use crate::backup::create_backup;
use crate::env::EnvironmentPort;
use crate::error::{PatchError, PatchResult};
use crate::utils::path::write_file;
use crate::utils::strings::split_lines_keep_terminators;

/// Sentinel comment written above the first declaration this tool adds
pub const MARKER_COMMENT: &str = "# Added by ConfigureMacKeys";

/// `export NAME=` prefix identifying a declaration of `name`
pub fn export_prefix(name: &str) -> String {
    format!("export {}=", name)
}

fn declares(line: &str, prefix: &str) -> bool {
    line.trim().starts_with(prefix)
}

/// Replace any declaration of `name` with `export name=value` at the end.
///
/// Returns the new lines and whether an existing declaration was dropped.
pub fn apply_add(lines: Vec<String>, name: &str, value: &str) -> (Vec<String>, bool) {
    let prefix = export_prefix(name);
    let before = lines.len();

    let mut lines: Vec<String> = lines
        .into_iter()
        .filter(|line| !declares(line, &prefix))
        .collect();
    let replaced = lines.len() != before;

    if !lines.iter().any(|line| line.contains(MARKER_COMMENT)) {
        lines.push("\n".to_string());
        lines.push(format!("{}\n", MARKER_COMMENT));
    }
    lines.push(format!("{}{}\n", prefix, value));

    (lines, replaced)
}

/// Drop every declaration of `name`, leaving all other lines untouched.
pub fn apply_remove(lines: &[String], name: &str) -> Vec<String> {
    let prefix = export_prefix(name);
    lines
        .iter()
        .filter(|line| !declares(line, &prefix))
        .cloned()
        .collect()
}

/// Result of a successful edit
#[derive(Debug)]
pub struct PatchOutcome {
    pub path: PathBuf,
    /// Backup written before the edit, if the profile existed
    pub backup: Option<PathBuf>,
    /// Backup failure that did not stop the edit
    pub backup_error: Option<PatchError>,
    /// An earlier declaration of the variable was replaced
    pub replaced: bool,
    /// The variable was also dropped from the running process
    pub removed_from_env: bool,
}

/// Applies add/remove edits to a single profile
pub struct ConfigPatcher<'a> {
    path: PathBuf,
    env: &'a dyn EnvironmentPort,
}

impl<'a> ConfigPatcher<'a> {
    pub fn new(path: impl Into<PathBuf>, env: &'a dyn EnvironmentPort) -> Self {
        Self {
            path: path.into(),
            env,
        }
    }

    /// Current profile lines; empty when the file does not exist
    pub fn read_lines(&self) -> PatchResult<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|source| PatchError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(split_lines_keep_terminators(&content))
    }

    fn write_lines(&self, lines: &[String]) -> PatchResult<()> {
        write_file(&self.path, &lines.concat()).map_err(|source| PatchError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn backup(&self) -> (Option<PathBuf>, Option<PatchError>) {
        match create_backup(&self.path) {
            Ok(backup) => (backup, None),
            Err(e) => (None, Some(e)),
        }
    }

    /// Persist `export name=value`, replacing earlier declarations of `name`.
    pub fn add_or_update(&self, name: &str, value: &str) -> PatchResult<PatchOutcome> {
        if name.is_empty() {
            return Err(PatchError::EmptyName);
        }

        let lines = self.read_lines()?;
        let (backup, backup_error) = self.backup();

        let (lines, replaced) = apply_add(lines, name, value);
        self.write_lines(&lines)?;

        Ok(PatchOutcome {
            path: self.path.clone(),
            backup,
            backup_error,
            replaced,
            removed_from_env: false,
        })
    }

    /// Delete every declaration of `name` and drop it from the environment.
    pub fn remove(&self, name: &str) -> PatchResult<PatchOutcome> {
        let lines = self.read_lines()?;
        if lines.is_empty() {
            return Err(PatchError::NothingToRemove {
                path: self.path.clone(),
            });
        }

        let (backup, backup_error) = self.backup();

        let remaining = apply_remove(&lines, name);
        if remaining.len() == lines.len() {
            return Err(PatchError::NotFound {
                name: name.to_string(),
                path: self.path.clone(),
            });
        }
        self.write_lines(&remaining)?;

        let removed_from_env = self.env.contains(name);
        if removed_from_env {
            self.env.remove_var(name);
        }

        Ok(PatchOutcome {
            path: self.path.clone(),
            backup,
            backup_error,
            replaced: false,
            removed_from_env,
        })
    }
}
