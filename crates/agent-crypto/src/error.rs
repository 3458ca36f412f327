//! Error types for the crypto agent

use thiserror::Error;

/// Crypto agent errors
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Query text was empty or whitespace
    #[error("Query must not be empty")]
    EmptyQuery,

    /// The model answered with no text
    #[error("Model returned an empty answer")]
    EmptyAnswer,

    /// Chat-completion call failed
    #[error("LLM error: {0}")]
    Llm(#[from] agent_llm::LLMError),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unparseable command line in the interactive shell
    #[error("Command error: {0}")]
    Command(String),

    /// Terminal I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for crypto agent operations
pub type Result<T> = std::result::Result<T, CryptoError>;

impl From<agent_utils::UtilsError> for CryptoError {
    fn from(err: agent_utils::UtilsError) -> Self {
        CryptoError::Config(err.to_string())
    }
}
