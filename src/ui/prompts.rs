//! Interactive environment picker.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::environment::EnvironmentSelection;
use crate::error::{Result, RestenvError};

use super::EnvironmentPicker;

/// Convert dialoguer errors to RestenvError.
fn map_dialoguer_err(e: dialoguer::Error) -> RestenvError {
    RestenvError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

fn format_candidate(candidate: &EnvironmentSelection) -> String {
    match &candidate.description {
        Some(description) => format!("{}  {}", candidate.label, style(description).dim()),
        None => candidate.label.clone(),
    }
}

/// Terminal picker backed by a dialoguer select prompt.
///
/// Escape cancels, which surfaces as `Ok(None)`.
pub struct TerminalPicker {
    term: Term,
}

impl TerminalPicker {
    /// Create a picker on stderr, leaving stdout for machine-readable output.
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for TerminalPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentPicker for TerminalPicker {
    fn show(
        &mut self,
        candidates: &[EnvironmentSelection],
        prompt: &str,
    ) -> Result<Option<EnvironmentSelection>> {
        let items: Vec<String> = candidates.iter().map(format_candidate).collect();

        let chosen = Select::with_theme(&prompt_theme())
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact_on_opt(&self.term)
            .map_err(map_dialoguer_err)?;

        Ok(chosen.map(|index| candidates[index].clone()))
    }
}
