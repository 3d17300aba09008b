//! Error types for profile patching

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the profile read-modify-write operations
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("Variable name cannot be empty")]
    EmptyName,

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Never aborts an edit; surfaced as a warning on the outcome.
    #[error("Failed to back up {}: {source}", path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Variable '{name}' not found in {}", path.display())]
    NotFound { name: String, path: PathBuf },

    #[error("No configuration file found at {}", path.display())]
    NothingToRemove { path: PathBuf },
}

pub type PatchResult<T> = std::result::Result<T, PatchError>;
