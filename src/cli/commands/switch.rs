//! Switch command implementation.
//!
//! The `restenv switch` command runs the pick-and-persist flow, either
//! interactively or via `--name`.

use std::time::Instant;

use console::style;

use crate::cli::args::SwitchArgs;
use crate::environment::{EnvironmentController, EnvironmentSelection};
use crate::error::{Result, RestenvError};
use crate::ui::{
    EnvironmentPicker, SilentStatus, StatusPresenter, TerminalPicker, TerminalStatus,
};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The switch command implementation.
pub struct SwitchCommand {
    args: SwitchArgs,
}

impl SwitchCommand {
    /// Create a new switch command.
    pub fn new(args: SwitchArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &SwitchArgs {
        &self.args
    }
}

impl Command for SwitchCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResult> {
        let config = ctx.load_config()?;

        let status: Box<dyn StatusPresenter> = if ctx.quiet {
            Box::new(SilentStatus)
        } else {
            Box::new(TerminalStatus::new())
        };
        let mut controller =
            EnvironmentController::new(Box::new(ctx.store()), ctx.notifier.clone(), status)?;

        let mut picker: Box<dyn EnvironmentPicker> = match &self.args.name {
            Some(name) => Box::new(NamedPicker { name: name.clone() }),
            None => Box::new(TerminalPicker::new()),
        };

        // Timing wrapper lives here at the call site; the controller's
        // contract stays free of observability concerns.
        let started = Instant::now();
        let span = tracing::info_span!("switch_environment");
        let outcome = span.in_scope(|| controller.switch_environment(&config, picker.as_mut()))?;
        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "switch flow finished"
        );

        match outcome {
            Some(choice) => {
                if !ctx.quiet {
                    eprintln!("{} switched to {}", style("✓").green(), choice.label);
                }
                Ok(CommandResult::success())
            }
            None => {
                if !ctx.quiet {
                    eprintln!("{}", style("No environment selected").dim());
                }
                Ok(CommandResult::success())
            }
        }
    }
}

/// Picker that selects by name without prompting.
///
/// The literal `none` maps to the reserved no-environment entry.
struct NamedPicker {
    name: String,
}

impl EnvironmentPicker for NamedPicker {
    fn show(
        &mut self,
        candidates: &[EnvironmentSelection],
        _prompt: &str,
    ) -> Result<Option<EnvironmentSelection>> {
        let found = candidates.iter().find(|c| {
            c.name == self.name || (self.name == "none" && c.is_no_environment())
        });
        match found {
            Some(candidate) => Ok(Some(candidate.clone())),
            None => Err(RestenvError::UnknownEnvironment {
                name: self.name.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<EnvironmentSelection> {
        vec![
            EnvironmentSelection::no_environment(),
            EnvironmentSelection::named("dev"),
            EnvironmentSelection::named("prod"),
        ]
    }

    #[test]
    fn named_picker_finds_candidate() {
        let mut picker = NamedPicker {
            name: "prod".into(),
        };
        let chosen = picker.show(&candidates(), "ignored").unwrap().unwrap();
        assert_eq!(chosen.name, "prod");
    }

    #[test]
    fn named_picker_maps_none_to_no_environment() {
        let mut picker = NamedPicker {
            name: "none".into(),
        };
        let chosen = picker.show(&candidates(), "ignored").unwrap().unwrap();
        assert!(chosen.is_no_environment());
    }

    #[test]
    fn named_picker_rejects_unknown() {
        let mut picker = NamedPicker {
            name: "staging".into(),
        };
        let result = picker.show(&candidates(), "ignored");
        assert!(matches!(
            result,
            Err(RestenvError::UnknownEnvironment { .. })
        ));
    }
}
