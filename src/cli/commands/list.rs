//! List command implementation.
//!
//! The `restenv list` command prints the candidate list exactly as the
//! picker would offer it: no-environment first, `$shared` filtered out, the
//! current selection marked.

use console::style;

use crate::cli::args::ListArgs;
use crate::environment::{candidate_list, EnvironmentController};
use crate::error::Result;
use crate::ui::SilentStatus;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResult> {
        let config = ctx.load_config()?;

        let controller = EnvironmentController::new(
            Box::new(ctx.store()),
            ctx.notifier.clone(),
            Box::new(SilentStatus),
        )?;
        let current = controller.current_environment()?;
        let candidates = candidate_list(&config, &current);

        if self.args.json {
            let json = serde_json::to_string_pretty(&candidates)
                .map_err(|e| anyhow::anyhow!("failed to serialize candidates: {e}"))?;
            println!("{json}");
            return Ok(CommandResult::success());
        }

        for candidate in &candidates {
            match &candidate.description {
                Some(description) => {
                    println!("{}  {}", candidate.label, style(description).dim())
                }
                None => println!("{}", candidate.label),
            }
        }

        Ok(CommandResult::success())
    }
}
