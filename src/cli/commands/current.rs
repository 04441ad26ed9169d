//! Current command implementation.
//!
//! The `restenv current` command prints the current environment. Reading is
//! self-healing: a fresh install prints (and persists) the no-environment
//! default.

use crate::cli::args::CurrentArgs;
use crate::environment::EnvironmentController;
use crate::error::Result;
use crate::ui::SilentStatus;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The current command implementation.
pub struct CurrentCommand {
    args: CurrentArgs,
}

impl CurrentCommand {
    /// Create a new current command.
    pub fn new(args: CurrentArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CurrentArgs {
        &self.args
    }
}

impl Command for CurrentCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResult> {
        // Stdout is the answer here; the status line stays silent.
        let controller = EnvironmentController::new(
            Box::new(ctx.store()),
            ctx.notifier.clone(),
            Box::new(SilentStatus),
        )?;
        let current = controller.current_environment()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&current)
                .map_err(|e| anyhow::anyhow!("failed to serialize selection: {e}"))?;
            println!("{json}");
        } else {
            println!("{}", current.label);
        }

        Ok(CommandResult::success())
    }
}
