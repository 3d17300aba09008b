//! Remove command implementation

use anyhow::Result;
use colored::Colorize;

use super::{describe_error, fill, report_backup};
use crate::cli::context::Context;
use crate::patcher::ConfigPatcher;

/// Execute the remove command
pub fn execute(ctx: &Context, name: &str) -> Result<()> {
    let msg = ctx.messages;
    let patcher = ConfigPatcher::new(&ctx.config_file, ctx.env.as_ref());

    let outcome = match patcher.remove(name) {
        Ok(outcome) => outcome,
        Err(e) => {
            ctx.print_error(&describe_error(ctx, &e));
            return Ok(());
        }
    };

    report_backup(ctx, &outcome);

    ctx.print_success(&fill(
        msg.var_removed,
        &[&name.cyan().to_string(), &outcome.path.display().to_string()],
    ));
    println!("{}", msg.removed_sessions_hint);

    if outcome.removed_from_env {
        ctx.print_success(&msg.removed_from_session.replace("{}", name));
    }

    ctx.print_reload_hint();

    Ok(())
}
