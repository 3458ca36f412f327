//! Configuration for the crypto agent
//!
//! Built once at startup and shared by reference for the life of the process.

use crate::error::{CryptoError, Result};
use agent_llm::providers::OpenAIConfig;
use agent_utils::{SecretStore, resolve_secret_with};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable / secrets-file key holding the provider API key
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Path of the JSON secrets file
pub const SECRETS_PATH_VAR: &str = "CRYPTO_AGENT_SECRETS";
/// Override for the chat-completion base URL
pub const API_BASE_VAR: &str = "CRYPTO_AGENT_API_BASE";
/// Override for the model name
pub const MODEL_VAR: &str = "CRYPTO_AGENT_MODEL";
/// Override for the request timeout in seconds
pub const TIMEOUT_VAR: &str = "CRYPTO_AGENT_TIMEOUT_SECS";

/// Gemini's OpenAI-compatible endpoint
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
/// Default chat model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
/// Default secrets file, relative to the working directory
pub const DEFAULT_SECRETS_PATH: &str = ".crypto-agent/secrets.json";

/// Configuration for the crypto agent
#[derive(Clone)]
pub struct CryptoConfig {
    /// Provider API key
    pub api_key: String,

    /// Chat-completion base URL
    pub api_base: String,

    /// Model name sent with every request
    pub model: String,

    /// Maximum tokens in an answer
    pub max_tokens: usize,

    /// HTTP request timeout
    pub request_timeout: Duration,
}

impl fmt::Debug for CryptoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl CryptoConfig {
    /// Create a new configuration builder
    pub fn builder() -> CryptoConfigBuilder {
        CryptoConfigBuilder::default()
    }

    /// Load configuration from `.env`, the environment and the secrets file.
    ///
    /// Fails when the API key is in neither source.
    pub fn from_env() -> Result<Self> {
        agent_utils::load_dotenv();

        let store = SecretStore::load(Self::secrets_path())?;

        Self::from_sources(|key| std::env::var(key).ok(), &store)
    }

    /// Load configuration from an arbitrary variable lookup and secrets store
    pub fn from_sources<F>(lookup: F, store: &SecretStore) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = resolve_secret_with(API_KEY_VAR, store, &lookup).ok_or_else(|| {
            let file = store
                .path()
                .map_or_else(|| DEFAULT_SECRETS_PATH.to_string(), |p| p.display().to_string());
            CryptoError::Config(format!(
                "{API_KEY_VAR} is not set. Define it in the environment, a .env file, or {file}"
            ))
        })?;

        let mut builder = Self::builder().api_key(api_key);

        if let Some(base) = lookup(API_BASE_VAR).filter(|v| !v.trim().is_empty()) {
            builder = builder.api_base(base);
        }
        if let Some(model) = lookup(MODEL_VAR).filter(|v| !v.trim().is_empty()) {
            builder = builder.model(model);
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                CryptoError::Config(format!("{TIMEOUT_VAR} must be a whole number of seconds, got '{raw}'"))
            })?;
            builder = builder.request_timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(CryptoError::Config(format!("{API_KEY_VAR} must not be empty")));
        }

        if self.model.trim().is_empty() {
            return Err(CryptoError::Config("model must not be empty".to_string()));
        }

        if self.max_tokens == 0 {
            return Err(CryptoError::Config(
                "max_tokens must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(CryptoError::Config(
                "request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Provider settings derived from this configuration
    pub fn provider_config(&self) -> OpenAIConfig {
        OpenAIConfig::new(self.api_key.clone())
            .with_api_base(self.api_base.clone())
            .with_timeout(self.request_timeout.as_secs())
    }

    /// The secrets file that [`CryptoConfig::from_env`] reads
    pub fn secrets_path() -> PathBuf {
        std::env::var(SECRETS_PATH_VAR)
            .map_or_else(|_| PathBuf::from(DEFAULT_SECRETS_PATH), PathBuf::from)
    }
}

/// Builder for CryptoConfig
#[derive(Debug, Default)]
pub struct CryptoConfigBuilder {
    api_key: Option<String>,
    api_base: Option<String>,
    model: Option<String>,
    max_tokens: Option<usize>,
    request_timeout: Option<Duration>,
}

impl CryptoConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the chat-completion base URL
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the answer token limit
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the HTTP request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<CryptoConfig> {
        let config = CryptoConfig {
            api_key: self.api_key.unwrap_or_default(),
            api_base: self.api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: self.max_tokens.unwrap_or(1024),
            request_timeout: self.request_timeout.unwrap_or(Duration::from_secs(120)),
        };

        config.validate()?;
        Ok(config)
    }
}
