//! Persistent selection storage.
//!
//! The current environment selection survives restarts through a
//! [`SelectionStore`]. The default implementation is [`FileSelectionStore`],
//! a YAML file under the user's home directory; [`MemorySelectionStore`]
//! backs tests and embedded use.

pub mod memory;
pub mod store;

pub use memory::MemorySelectionStore;
pub use store::FileSelectionStore;

use crate::environment::EnvironmentSelection;
use crate::error::Result;

/// Durable storage for the current environment selection.
///
/// Absence is ordinary: a store that has never been written returns
/// `Ok(None)`, and so does one whose contents cannot be read back (the
/// controller self-heals by writing a fresh default). Only genuine storage
/// failures are errors.
pub trait SelectionStore {
    /// Load the persisted selection, or `None` if nothing usable is stored.
    fn load_environment(&self) -> Result<Option<EnvironmentSelection>>;

    /// Persist `selection`, replacing any previous record.
    fn save_environment(&self, selection: &EnvironmentSelection) -> Result<()>;
}
