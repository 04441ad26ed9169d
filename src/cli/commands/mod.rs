//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Shared collaborators (the selection
//! store, the notification channel, config discovery) live on
//! [`CommandContext`] so every command wires them the same way.

pub mod completions;
pub mod current;
pub mod dispatcher;
pub mod list;
pub mod switch;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
