//! restenv - Environment switching for HTTP request collections.
//!
//! restenv manages which named "environment" (a set of variable bindings) is
//! in effect when authoring requests: it enumerates the configured
//! environments, lets the user pick one interactively, persists the choice
//! across sessions, and notifies interested subsystems when it changes.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and the environments mapping
//! - [`environment`] - Selection state machine, controller, change notifier
//! - [`error`] - Error types and result aliases
//! - [`state`] - Persistent storage of the current selection
//! - [`ui`] - Picker and status-line abstractions, terminal and mock impls
//!
//! # Example
//!
//! ```
//! use restenv::environment::{ChangeNotifier, EnvironmentController};
//! use restenv::state::MemorySelectionStore;
//! use restenv::ui::MockStatus;
//!
//! let notifier = ChangeNotifier::new();
//! let controller = EnvironmentController::new(
//!     Box::new(MemorySelectionStore::new()),
//!     notifier.clone(),
//!     Box::new(MockStatus::new()),
//! ).unwrap();
//!
//! // A fresh store self-heals to the reserved no-environment entry.
//! let current = controller.current_environment().unwrap();
//! assert_eq!(current.label, "No Environment");
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod state;
pub mod ui;

pub use error::{RestenvError, Result};
