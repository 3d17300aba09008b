//! configkeys - Shell profile environment variable manager
//!
//! Keeps `export NAME=VALUE` declarations in a shell startup file.
//!
//! # Features
//!
//! - List the current process environment, optionally filtered by name
//! - Add or update a persisted export line (one declaration per name)
//! - Remove a persisted export line
//! - Report the profile location and status
//! - Automatic single-slot backups before every edit

pub mod backup;
pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod i18n;
pub mod model;
pub mod patcher;
pub mod utils;

pub use env::{EnvironmentPort, MemoryEnv, ProcessEnv};
pub use error::{PatchError, PatchResult};
pub use model::{Config, ProfileStatus, ShellType};
pub use patcher::{ConfigPatcher, PatchOutcome, MARKER_COMMENT};
