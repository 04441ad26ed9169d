//! Command-line interface for restenv.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations and dispatching

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, CurrentArgs, ListArgs, SwitchArgs};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
