//! Environment selection records.
//!
//! [`EnvironmentSelection`] is the unit the rest of the crate passes around:
//! one entry in the picker's candidate list, and the record persisted as the
//! current choice. Two selections are the same selection iff their names
//! match; labels and descriptions are presentation only.

use serde::{Deserialize, Serialize};

/// Reserved name persisted when no environment is selected.
///
/// Deliberately not a name a user would give a real environment.
pub const NO_ENVIRONMENT_NAME: &str = "NoEnvironmentSelectedName";

/// Display label for the no-environment entry.
pub const NO_ENVIRONMENT_LABEL: &str = "No Environment";

/// Reserved environment whose variables are merged into every environment.
///
/// Present in configuration files but never offered as a candidate.
pub const SHARED_ENVIRONMENT_NAME: &str = "$shared";

/// Marker attached to the candidate matching the current selection.
pub const CURRENT_MARKER: &str = "(current)";

const NO_ENVIRONMENT_DESCRIPTION: &str =
    "You can still use variables defined in the $shared environment";

/// One candidate environment, or the active choice.
///
/// Equality and hashing consider only `name`: within one configuration
/// snapshot the name uniquely identifies a selection, while `label` and
/// `description` may vary between the picker and the persisted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentSelection {
    /// Stable identifier used for persistence and equality.
    pub name: String,

    /// Human-readable display string for the picker and status line.
    pub label: String,

    /// Picker-only annotation, e.g. the current-selection marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EnvironmentSelection {
    /// Create a selection for a configured environment.
    ///
    /// The label mirrors the name; configuration files identify environments
    /// by a single key.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            label: name.to_string(),
            description: None,
        }
    }

    /// The reserved "no environment selected" entry.
    ///
    /// Its description is fixed reserved text and is never replaced by the
    /// current-selection marker.
    pub fn no_environment() -> Self {
        Self {
            name: NO_ENVIRONMENT_NAME.to_string(),
            label: NO_ENVIRONMENT_LABEL.to_string(),
            description: Some(NO_ENVIRONMENT_DESCRIPTION.to_string()),
        }
    }

    /// Whether this is the reserved no-environment entry.
    pub fn is_no_environment(&self) -> bool {
        self.name == NO_ENVIRONMENT_NAME
    }

    /// Attach the current-selection marker.
    pub fn mark_current(&mut self) {
        self.description = Some(CURRENT_MARKER.to_string());
    }
}

impl PartialEq for EnvironmentSelection {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for EnvironmentSelection {}

impl std::hash::Hash for EnvironmentSelection {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
