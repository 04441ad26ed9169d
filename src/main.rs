//! restenv CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use restenv::cli::{Cli, CommandContext, CommandDispatcher};
use restenv::environment::ChangeNotifier;
use restenv::state::FileSelectionStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("restenv=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("restenv=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("restenv starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let state_path = cli
        .state_file
        .as_ref()
        .cloned()
        .unwrap_or_else(FileSelectionStore::default_path);

    // The one change-notification channel for this process. Controllers
    // come and go; the channel does not.
    let notifier = ChangeNotifier::new();

    let ctx = CommandContext {
        project_root,
        config_path: cli.config.clone(),
        state_path,
        notifier,
        quiet: cli.quiet,
    };

    let dispatcher = CommandDispatcher::new(ctx);

    match dispatcher.dispatch(&cli) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
