//! Set command implementation

use anyhow::Result;
use colored::Colorize;

use super::{describe_error, fill, report_backup};
use crate::cli::context::Context;
use crate::patcher::ConfigPatcher;

/// Execute the set command
pub fn execute(ctx: &Context, name: &str, value: &str, temp: bool) -> Result<()> {
    let msg = ctx.messages;

    if temp {
        // A child process can't change its parent shell, so just show how
        if name.is_empty() {
            ctx.print_error(msg.empty_name);
            return Ok(());
        }
        println!("{}", msg.temp_intro.replace("{}", name));
        println!("  {}", format!("export {}={}", name, value).cyan());
        println!();
        println!("{}", msg.temp_persist_hint);
        println!("  {}", format!("configkeys set {} {}", name, value).cyan());
        return Ok(());
    }

    let patcher = ConfigPatcher::new(&ctx.config_file, ctx.env.as_ref());
    let outcome = match patcher.add_or_update(name, value) {
        Ok(outcome) => outcome,
        Err(e) => {
            ctx.print_error(&describe_error(ctx, &e));
            return Ok(());
        }
    };

    report_backup(ctx, &outcome);

    let template = if outcome.replaced {
        msg.var_updated
    } else {
        msg.var_added
    };
    ctx.print_success(&fill(
        template,
        &[&name.cyan().to_string(), &outcome.path.display().to_string()],
    ));
    ctx.print_success(msg.new_sessions_hint);
    ctx.print_reload_hint();

    Ok(())
}
