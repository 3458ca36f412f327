//! Error types for agent-utils

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for agent-utils
pub type Result<T> = std::result::Result<T, UtilsError>;

/// Errors raised while reading local configuration
#[derive(Error, Debug)]
pub enum UtilsError {
    /// Secrets file exists but could not be read
    #[error("Failed to read secrets file {}: {source}", path.display())]
    SecretsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Secrets file is not a JSON object of strings
    #[error("Invalid secrets file {}: {source}", path.display())]
    SecretsFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
