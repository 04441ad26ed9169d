//! Configuration file discovery and loading.
//!
//! Configuration lives next to the request collection: `restenv.yml` or
//! `.restenv.yml` in the project root, with `~/.restenv/config.yml` as the
//! user-global fallback.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::RequestConfig;
use crate::error::{Result, RestenvError};

/// Project-level config file names, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &["restenv.yml", ".restenv.yml"];

/// Find the config file for the given project root.
///
/// Checks the project-level names first, then the user-global fallback.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    for name in CONFIG_FILE_NAMES {
        let path = project_root.join(name);
        if path.exists() {
            return Some(path);
        }
    }

    let global = dirs::home_dir()?.join(".restenv").join("config.yml");
    if global.exists() {
        Some(global)
    } else {
        None
    }
}

/// Load the configuration for a project root.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no config file exists in any candidate
/// location, and `ConfigParseError` for invalid YAML.
pub fn load_config(project_root: &Path) -> Result<RequestConfig> {
    let path = find_config(project_root).ok_or_else(|| RestenvError::ConfigNotFound {
        path: project_root.join(CONFIG_FILE_NAMES[0]),
    })?;
    load_config_file(&path)
}

/// Load and parse a specific configuration file.
pub fn load_config_file(path: &Path) -> Result<RequestConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RestenvError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RestenvError::Io(e)
        }
    })?;

    let config: RequestConfig =
        serde_yaml::from_str(&content).map_err(|e| RestenvError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        environments = config.environments.len(),
        "loaded configuration"
    );

    Ok(config)
}
