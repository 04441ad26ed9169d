//! File-backed selection storage.
//!
//! Persists the current selection as a small YAML document, by default at
//! `~/.restenv/environment.yml`. Writes use the write-to-temp-then-rename
//! pattern so the file is never left partially written.

use std::fs;
use std::path::{Path, PathBuf};

use crate::environment::EnvironmentSelection;
use crate::error::{Result, RestenvError};

use super::SelectionStore;

/// YAML file holding the persisted current selection.
#[derive(Debug, Clone)]
pub struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    /// Create a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default location under the home directory.
    pub fn at_default_path() -> Self {
        Self::new(Self::default_path())
    }

    /// Default location: `~/.restenv/environment.yml`.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(".restenv")
            .join("environment.yml")
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionStore for FileSelectionStore {
    fn load_environment(&self) -> Result<Option<EnvironmentSelection>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_yaml::from_str(&content) {
            Ok(selection) => Ok(Some(selection)),
            Err(e) => {
                // Unreadable state is absence, not failure; the next save
                // replaces it wholesale.
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "persisted selection is unreadable, treating as unset"
                );
                Ok(None)
            }
        }
    }

    fn save_environment(&self, selection: &EnvironmentSelection) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content =
            serde_yaml::to_string(selection).map_err(|e| RestenvError::PersistError {
                message: e.to_string(),
            })?;

        // Atomic write: write to temp file, then rename
        let temp_path = self.path.with_extension("yml.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}
