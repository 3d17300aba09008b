//! CLI command implementations

pub mod info;
pub mod list;
pub mod remove;
pub mod set;

use anyhow::Result;

use crate::cli::args::Commands;
use crate::cli::context::Context;
use crate::error::PatchError;
use crate::patcher::PatchOutcome;

/// Dispatch a parsed subcommand
pub fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::List { filter } => list::execute(ctx, filter.as_deref()),
        Commands::Set { name, value, temp } => set::execute(ctx, name, value, *temp),
        Commands::Remove { name } => remove::execute(ctx, name),
        Commands::Info => info::execute(ctx),
    }
}

/// Fill `{}` placeholders in order, in a single pass over `template`.
///
/// Inserted values are never rescanned, so a value containing `{}` stays
/// literal. Extra placeholders are left as-is.
pub(crate) fn fill(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("{}"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

/// User-facing text for a patch failure
pub(crate) fn describe_error(ctx: &Context, err: &PatchError) -> String {
    let msg = ctx.messages;
    match err {
        PatchError::EmptyName => msg.empty_name.to_string(),
        PatchError::NotFound { name, path } => {
            fill(msg.var_not_found, &[name, &path.display().to_string()])
        }
        PatchError::NothingToRemove { path } => msg
            .no_config_file
            .replace("{}", &path.display().to_string()),
        other => other.to_string(),
    }
}

/// Report the backup half of an edit
pub(crate) fn report_backup(ctx: &Context, outcome: &PatchOutcome) {
    if let Some(backup) = &outcome.backup {
        ctx.print_success(
            &ctx.messages
                .backup_created
                .replace("{}", &backup.display().to_string()),
        );
    }
    if let Some(err) = &outcome.backup_error {
        ctx.print_warning(&ctx.messages.backup_failed.replace("{}", &err.to_string()));
    }
}
