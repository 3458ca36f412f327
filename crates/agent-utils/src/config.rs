//! Configuration helpers: `.env` loading and secret lookup
//!
//! Secrets are resolved from the process environment first and then from a
//! JSON secrets file of the form:
//!
//! ```json
//! { "GEMINI_API_KEY": "..." }
//! ```

use crate::error::{Result, UtilsError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load a `.env` file from the current directory or its parents, if any.
///
/// Variables already present in the environment are not overridden.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "Loaded .env file");
            Some(path)
        }
        Err(_) => None,
    }
}

/// Key/value secrets read from a local JSON file
#[derive(Debug, Clone, Default)]
pub struct SecretStore {
    path: Option<PathBuf>,
    values: HashMap<String, String>,
}

impl SecretStore {
    /// Read the secrets file at `path`.
    ///
    /// A missing file yields an empty store; an unreadable or malformed file
    /// is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No secrets file");
                return Ok(Self {
                    path: Some(path),
                    values: HashMap::new(),
                });
            }
            Err(source) => return Err(UtilsError::SecretsIo { path, source }),
        };

        let values: HashMap<String, String> = serde_json::from_str(&raw)
            .map_err(|source| UtilsError::SecretsFormat {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path: Some(path),
            values,
        })
    }

    /// Build a store from in-memory values
    pub fn from_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            path: None,
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a non-blank secret
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Where the store was read from, if it came from a file
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Resolve `name` from the environment, falling back to `store`.
///
/// Blank values are treated as absent in both sources.
pub fn resolve_secret(name: &str, store: &SecretStore) -> Option<String> {
    resolve_secret_with(name, store, |key| std::env::var(key).ok())
}

/// Like [`resolve_secret`], reading the first source through `lookup`.
pub fn resolve_secret_with<F>(name: &str, store: &SecretStore, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .or_else(|| store.get(name).map(str::to_string))
}
