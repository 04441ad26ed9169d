//! In-memory selection storage.

use std::sync::Mutex;

use crate::environment::EnvironmentSelection;
use crate::error::Result;

use super::SelectionStore;

/// Selection store held in memory.
///
/// Used by tests and by hosts that manage their own durability. The save
/// counter lets tests assert exactly how many writes a flow performed.
#[derive(Debug, Default)]
pub struct MemorySelectionStore {
    current: Mutex<Option<EnvironmentSelection>>,
    saves: Mutex<usize>,
}

impl MemorySelectionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a selection.
    pub fn with_selection(selection: EnvironmentSelection) -> Self {
        Self {
            current: Mutex::new(Some(selection)),
            saves: Mutex::new(0),
        }
    }

    /// Number of saves performed since construction.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl SelectionStore for MemorySelectionStore {
    fn load_environment(&self) -> Result<Option<EnvironmentSelection>> {
        Ok(self.current.lock().unwrap().clone())
    }

    fn save_environment(&self, selection: &EnvironmentSelection) -> Result<()> {
        *self.current.lock().unwrap() = Some(selection.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_none() {
        let store = MemorySelectionStore::new();
        assert!(store.load_environment().unwrap().is_none());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn save_then_load_returns_selection() {
        let store = MemorySelectionStore::new();
        store
            .save_environment(&EnvironmentSelection::named("dev"))
            .unwrap();

        let loaded = store.load_environment().unwrap().unwrap();
        assert_eq!(loaded.name, "dev");
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn seeded_store_loads_seed() {
        let store = MemorySelectionStore::with_selection(EnvironmentSelection::named("prod"));
        let loaded = store.load_environment().unwrap().unwrap();
        assert_eq!(loaded.name, "prod");
    }
}
