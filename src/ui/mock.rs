//! Mock UI implementations for testing.
//!
//! [`MockPicker`] stands in for the interactive picker: it is scripted to
//! choose a named candidate or to cancel, and records every candidate list
//! it was shown. [`MockStatus`] records status updates behind a shared
//! handle, so tests can keep observing after handing it to a controller.
//!
//! # Example
//!
//! ```
//! use restenv::ui::{EnvironmentPicker, MockPicker};
//! use restenv::environment::EnvironmentSelection;
//!
//! let mut picker = MockPicker::choosing("prod");
//! let candidates = vec![EnvironmentSelection::named("prod")];
//! let chosen = picker.show(&candidates, "Select").unwrap();
//! assert_eq!(chosen.unwrap().name, "prod");
//! assert_eq!(picker.prompts_shown(), ["Select"]);
//! ```

use std::sync::{Arc, Mutex};

use crate::environment::EnvironmentSelection;
use crate::error::Result;

use super::{EnvironmentPicker, StatusPresenter};

/// Scripted picker for tests.
#[derive(Debug, Default)]
pub struct MockPicker {
    choice: Option<String>,
    shown: Vec<Vec<EnvironmentSelection>>,
    prompts: Vec<String>,
}

impl MockPicker {
    /// Picker that cancels every prompt.
    pub fn cancelling() -> Self {
        Self::default()
    }

    /// Picker that picks the candidate with the given name.
    ///
    /// Panics inside `show` if no candidate has that name, which flags a
    /// mis-scripted test immediately.
    pub fn choosing(name: &str) -> Self {
        Self {
            choice: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Every candidate list shown so far.
    pub fn candidate_lists(&self) -> &[Vec<EnvironmentSelection>] {
        &self.shown
    }

    /// Every prompt string shown so far.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts
    }
}

impl EnvironmentPicker for MockPicker {
    fn show(
        &mut self,
        candidates: &[EnvironmentSelection],
        prompt: &str,
    ) -> Result<Option<EnvironmentSelection>> {
        self.shown.push(candidates.to_vec());
        self.prompts.push(prompt.to_string());

        match &self.choice {
            None => Ok(None),
            Some(name) => {
                let found = candidates
                    .iter()
                    .find(|c| c.name == *name)
                    .unwrap_or_else(|| panic!("MockPicker scripted for absent candidate {name:?}"));
                Ok(Some(found.clone()))
            }
        }
    }
}

#[derive(Debug, Default)]
struct StatusRecord {
    updates: Vec<String>,
    released: bool,
}

/// Recording status presenter for tests.
///
/// Clones share the same record, so a test can keep one handle while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct MockStatus {
    record: Arc<Mutex<StatusRecord>>,
}

impl MockStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// All labels passed to `update`, oldest first.
    pub fn updates(&self) -> Vec<String> {
        self.record.lock().unwrap().updates.clone()
    }

    /// The most recent update, if any.
    pub fn last_update(&self) -> Option<String> {
        self.record.lock().unwrap().updates.last().cloned()
    }

    /// Whether `release` has been called.
    pub fn is_released(&self) -> bool {
        self.record.lock().unwrap().released
    }
}

impl StatusPresenter for MockStatus {
    fn update(&mut self, label: &str) {
        self.record.lock().unwrap().updates.push(label.to_string());
    }

    fn release(&mut self) {
        self.record.lock().unwrap().released = true;
    }
}
