//! Terminal status line.

use std::io::Write;

use console::{style, Term};

use super::StatusPresenter;

/// Prints the current environment to stderr whenever it changes.
///
/// A CLI has no persistent status bar, so the presenter writes one styled
/// line per update instead.
pub struct TerminalStatus {
    term: Term,
}

impl TerminalStatus {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for TerminalStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusPresenter for TerminalStatus {
    fn update(&mut self, label: &str) {
        let line = format!(
            "{} {}",
            style("Environment:").dim(),
            style(label).cyan().bold()
        );
        let _ = self.term.write_line(&line);
    }

    fn release(&mut self) {
        let _ = Write::flush(&mut self.term);
    }
}

/// Status presenter that displays nothing.
///
/// Used with `--quiet` and by commands whose stdout is machine-readable.
#[derive(Debug, Default)]
pub struct SilentStatus;

impl StatusPresenter for SilentStatus {
    fn update(&mut self, _label: &str) {}

    fn release(&mut self) {}
}
