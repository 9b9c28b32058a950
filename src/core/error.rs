//! Error types for core module
//!
//! Every settings failure carries the file it concerns, so the startup
//! fallback can log one line that says what went wrong and where.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading, writing or creating the settings file failed
    #[error("Settings I/O error on {path:?}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file is not the JSON we expect, or could not be encoded
    #[error("Settings serialization error on {path:?}: {source}")]
    SettingsSerialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Settings parsed but describe an unusable configuration
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| CoreError::SettingsIo { path, source }
    }

    pub(crate) fn serialization(path: impl Into<PathBuf>) -> impl FnOnce(serde_json::Error) -> Self {
        let path = path.into();
        move |source| CoreError::SettingsSerialization { path, source }
    }
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
