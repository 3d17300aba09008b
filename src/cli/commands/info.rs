//! Info command implementation - Display profile location and status

use anyhow::Result;
use colored::Colorize;

use crate::backup::backup_path;
use crate::cli::context::Context;
use crate::model::export::persisted_names;
use crate::model::{ProfileStatus, CANDIDATE_PROFILES};
use crate::utils::path::home_path;

/// Execute the info command
pub fn execute(ctx: &Context) -> Result<()> {
    let msg = ctx.messages;
    let status = ProfileStatus::inspect(&ctx.config_file);

    println!(
        "{} {}",
        msg.info_primary.bold(),
        status.path.display().to_string().cyan()
    );
    println!("  {:<16} {}", msg.info_shell, ctx.shell_type);
    println!("  {:<16} {}", msg.info_exists, msg.yes_no(status.exists));

    if status.exists {
        if let Some(size) = status.size {
            println!(
                "  {:<16} {}",
                msg.info_size,
                msg.info_bytes.replace("{}", &size.to_string())
            );
        }
        if let Some(modified) = status.modified_display() {
            println!("  {:<16} {}", msg.info_modified, modified);
        }
    }

    let backup = backup_path(&status.path);
    let backup_marker = if backup.exists() {
        "✓".green()
    } else {
        "✗".dimmed()
    };
    println!(
        "  {:<16} {} {}",
        msg.info_backup,
        backup_marker,
        backup.display().to_string().dimmed()
    );

    // Unreadable content just shows as no declarations
    let names = std::fs::read_to_string(&status.path)
        .map(|content| persisted_names(&content))
        .unwrap_or_default();
    if names.is_empty() {
        println!("  {:<16} {}", msg.info_persisted, msg.none.dimmed());
    } else {
        println!("  {:<16} {}", msg.info_persisted, names.join(", "));
    }

    println!();
    println!("{}", msg.info_candidates.bold());
    for candidate in CANDIDATE_PROFILES {
        let path = home_path(candidate);
        let marker = if path.exists() {
            "✓".green()
        } else {
            "✗".dimmed()
        };
        let primary = if path == status.path { " *" } else { "" };
        println!("  {} {}{}", marker, path.display(), primary.cyan());
    }

    Ok(())
}
