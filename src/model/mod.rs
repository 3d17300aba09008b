//! Core data models for configkeys

mod config;
pub mod export;
mod profile;
mod shell;

pub use config::{Config, ListConfig, ProfileConfig, UiConfig};
pub use export::ExportLine;
pub use profile::ProfileStatus;
pub use shell::{ShellType, CANDIDATE_PROFILES};
