//! Error types for restenv operations.
//!
//! This module defines [`RestenvError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RestenvError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RestenvError::Other`) for unexpected errors
//! - User cancellation of a prompt is never an error; it surfaces as `Ok(None)`
//!   from the interactive flows

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for restenv operations.
#[derive(Debug, Error)]
pub enum RestenvError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to write the persisted environment selection.
    #[error("Failed to persist environment selection: {message}")]
    PersistError { message: String },

    /// Named environment does not exist in the configuration.
    #[error("Unknown environment: {name}")]
    UnknownEnvironment { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for restenv operations.
pub type Result<T> = std::result::Result<T, RestenvError>;
