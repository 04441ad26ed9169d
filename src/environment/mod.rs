//! Environment selection core.
//!
//! This module owns the notion of the "current environment": which named set
//! of variables is in effect when authoring requests. It provides:
//!
//! - [`EnvironmentSelection`] - a candidate or the active choice
//! - [`EnvironmentController`] - the pick-and-persist state machine
//! - [`ChangeNotifier`] - change broadcast to interested subsystems
//!
//! The controller talks to its collaborators (store, picker, status line)
//! through traits, so the core has no dependency on any particular storage
//! or presentation technology.

pub mod controller;
pub mod notifier;
pub mod selection;

pub use controller::{candidate_list, EnvironmentController, SWITCH_PROMPT};
pub use notifier::{ChangeNotifier, Subscription};
pub use selection::{
    EnvironmentSelection, CURRENT_MARKER, NO_ENVIRONMENT_LABEL, NO_ENVIRONMENT_NAME,
    SHARED_ENVIRONMENT_NAME,
};
