//! configkeys - Shell profile environment variable manager

use anyhow::Result;
use clap::{CommandFactory, Parser};

use configkeys::cli::{commands, Cli, Context};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let ctx = Context::from_cli(&cli)?;
    commands::execute(&ctx, command)
}
