//! List command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::env::{display_line, list_vars};

/// Widest separator drawn under the header
const RULE_WIDTH: usize = 50;

/// Get terminal width, defaulting to 80 if unable to detect
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Execute the list command
pub fn execute(ctx: &Context, filter: Option<&str>) -> Result<()> {
    let msg = ctx.messages;
    let vars = list_vars(ctx.env.as_ref(), filter);

    if vars.is_empty() {
        match filter {
            Some(filter) => println!("{}", msg.no_vars_matching.replace("{}", filter)),
            None => println!("{}", msg.no_vars_found),
        }
        return Ok(());
    }

    println!();
    println!(
        "{}",
        msg.found_vars.replace("{}", &vars.len().to_string()).bold()
    );
    println!("{}", "-".repeat(get_terminal_width().min(RULE_WIDTH)).dimmed());

    let max_width = ctx.config.list.max_value_width;
    for (key, value) in &vars {
        println!("{}", display_line(key, value, max_width));
    }

    Ok(())
}
