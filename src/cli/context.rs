//! Command execution context

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::config::{load_or_create_config, resolve_profile_path};
use crate::env::{EnvironmentPort, ProcessEnv};
use crate::i18n::{init_messages, Messages};
use crate::model::{Config, ShellType};
use crate::utils::shell_detect::get_shell_type;

/// Common context for command execution
pub struct Context {
    pub config: Config,
    pub shell_type: ShellType,
    pub config_file: PathBuf,
    pub messages: &'static Messages,
    pub env: Box<dyn EnvironmentPort>,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = load_or_create_config()?;
        let shell_type = get_shell_type(cli.shell.map(Into::into), cli.file.as_deref());
        let config_file = resolve_profile_path(cli.file.as_deref(), &config, shell_type);

        Ok(Self::new(
            config,
            shell_type,
            config_file,
            Box::new(ProcessEnv),
        ))
    }

    pub fn new(
        config: Config,
        shell_type: ShellType,
        config_file: PathBuf,
        env: Box<dyn EnvironmentPort>,
    ) -> Self {
        let messages = init_messages(&config.ui.language);
        Self {
            config,
            shell_type,
            config_file,
            messages,
            env,
        }
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print reload hint after modifying the profile
    pub fn print_reload_hint(&self) {
        let reload_cmd = format!("source {}", self.config_file.display());
        println!(
            "{} {}",
            "→".cyan(),
            self.messages
                .reload_hint
                .replace("{}", &reload_cmd)
                .dimmed()
        );
    }
}
