//! Shared utilities for crypto-agent
//!
//! Logging setup, `.env` loading and secret lookup used by the binaries and
//! the application crate.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{SecretStore, load_dotenv, resolve_secret, resolve_secret_with};
pub use error::{Result, UtilsError};
pub use logging::{init_tracing, init_tracing_with_default};
