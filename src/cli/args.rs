//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  configkeys list                          # List all environment variables
  configkeys list PATH                     # List variables containing 'PATH'
  configkeys set GEMINI_API_KEY mykey123   # Persist a variable in your profile
  configkeys set DEBUG 1 --temp            # Show how to set it for this session only
  configkeys remove OLD_VAR                # Remove a persisted variable
  configkeys info                          # Show profile location and status";

#[derive(Parser)]
#[command(name = "configkeys")]
#[command(about = "Environment variable manager - persist exports in your shell profile")]
#[command(version)]
#[command(author)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Shell profile to edit (defaults to the profile of the detected shell)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Shell type used to pick the default profile
    #[arg(short, long, global = true)]
    pub shell: Option<ShellArg>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List environment variables
    #[command(visible_alias = "ls")]
    List {
        /// Only show variables whose name contains this text (case-insensitive)
        filter: Option<String>,
    },

    /// Set an environment variable
    Set {
        /// Variable name
        name: String,
        /// Variable value
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Set only for the current session (nothing is written)
        #[arg(long)]
        temp: bool,
    },

    /// Remove an environment variable from the profile
    #[command(visible_alias = "rm")]
    Remove {
        /// Variable name to remove
        name: String,
    },

    /// Show profile location and status
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ShellArg {
    Zsh,
    Bash,
}

impl From<ShellArg> for crate::model::ShellType {
    fn from(arg: ShellArg) -> Self {
        match arg {
            ShellArg::Zsh => crate::model::ShellType::Zsh,
            ShellArg::Bash => crate::model::ShellType::Bash,
        }
    }
}
