//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for shared collaborators
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, SwitchArgs};
use crate::config::{self, RequestConfig};
use crate::environment::ChangeNotifier;
use crate::error::{Result, RestenvError};
use crate::state::FileSelectionStore;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command against the shared context.
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Collaborators and paths shared by every command.
#[derive(Debug)]
pub struct CommandContext {
    /// Project root for config discovery.
    pub project_root: PathBuf,

    /// Explicit config file, bypassing discovery.
    pub config_path: Option<PathBuf>,

    /// Location of the persisted selection.
    pub state_path: PathBuf,

    /// Process-wide change notification channel.
    pub notifier: ChangeNotifier,

    /// Suppress decorative output.
    pub quiet: bool,
}

impl CommandContext {
    /// Store over the configured state path.
    pub fn store(&self) -> FileSelectionStore {
        FileSelectionStore::new(&self.state_path)
    }

    /// Load the configuration.
    ///
    /// An explicit `--config` path must exist and parse. Discovery finding
    /// nothing is not an error here: switching with no environments
    /// configured is legal (the candidate list is just the no-environment
    /// entry), so the mapping comes back empty.
    pub fn load_config(&self) -> Result<RequestConfig> {
        if let Some(path) = &self.config_path {
            return config::load_config_file(path);
        }
        match config::load_config(&self.project_root) {
            Ok(config) => Ok(config),
            Err(RestenvError::ConfigNotFound { .. }) => Ok(RequestConfig::default()),
            Err(e) => Err(e),
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    ctx: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher over the given context.
    pub fn new(ctx: CommandContext) -> Self {
        Self { ctx }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.ctx.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means an interactive switch.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Switch(args)) => {
                let cmd = super::switch::SwitchCommand::new(args.clone());
                cmd.execute(&self.ctx)
            }
            Some(Commands::Current(args)) => {
                let cmd = super::current::CurrentCommand::new(args.clone());
                cmd.execute(&self.ctx)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(args.clone());
                cmd.execute(&self.ctx)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(&self.ctx)
            }
            None => {
                let cmd = super::switch::SwitchCommand::new(SwitchArgs::default());
                cmd.execute(&self.ctx)
            }
        }
    }
}
