//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// restenv - Environment switching for HTTP request collections.
#[derive(Debug, Parser)]
#[command(name = "restenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides restenv.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Path to the persisted selection file (overrides ~/.restenv/environment.yml)
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Switch the current environment (default if no command specified)
    Switch(SwitchArgs),

    /// Show the current environment
    Current(CurrentArgs),

    /// List selectable environments
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `switch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SwitchArgs {
    /// Environment name to select without prompting ('none' clears the selection)
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Arguments for the `current` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CurrentArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
