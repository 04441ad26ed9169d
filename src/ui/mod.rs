//! User interface components.
//!
//! This module provides:
//! - [`EnvironmentPicker`] and [`StatusPresenter`] traits for UI abstraction
//! - [`TerminalPicker`] for interactive terminal usage
//! - [`TerminalStatus`] for the visible current-environment line
//! - Mock implementations for tests
//!
//! The core controller only ever sees the traits, so it carries no dependency
//! on any particular presentation technology.

pub mod mock;
pub mod prompts;
pub mod status;

pub use mock::{MockPicker, MockStatus};
pub use prompts::TerminalPicker;
pub use status::{SilentStatus, TerminalStatus};

use crate::environment::EnvironmentSelection;
use crate::error::Result;

/// Presents an ordered candidate list and returns the user's choice.
pub trait EnvironmentPicker {
    /// Show `candidates` under `prompt` and await the choice.
    ///
    /// `Ok(None)` means the user canceled; that is a normal outcome, distinct
    /// from any error.
    fn show(
        &mut self,
        candidates: &[EnvironmentSelection],
        prompt: &str,
    ) -> Result<Option<EnvironmentSelection>>;
}

/// Displays the current environment name somewhere visible.
///
/// Purely a sink; the core never reads anything back.
pub trait StatusPresenter {
    /// Show `label` as the current environment.
    fn update(&mut self, label: &str);

    /// Release any presentation resource. Called when the owning controller
    /// is dropped.
    fn release(&mut self);
}
