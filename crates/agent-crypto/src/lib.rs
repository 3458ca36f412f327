//! AI crypto agent
//!
//! Two independent, stateless flows behind one small application shell:
//!
//! - **Query**: a free-text question is sent to a chat-completion model under
//!   a fixed cryptocurrency-expert system prompt and the answer is shown.
//! - **Trends**: a deterministic, simulated daily price series (100 days from
//!   2024-01-01, seed 42) is generated for a symbol and drawn as a line chart.
//!
//! Rendering goes through the [`DisplaySurface`] trait. [`TerminalSurface`]
//! is the implementation used by the `crypto-agent` binary.
//!
//! # Example
//!
//! ```rust,ignore
//! use agent_crypto::{CryptoAgentApp, CryptoConfig, QueryHandler, TerminalOptions, TerminalSurface};
//! use agent_llm::providers::OpenAIProvider;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(CryptoConfig::from_env()?);
//!     let provider = Arc::new(OpenAIProvider::with_config(config.provider_config())?);
//!
//!     let queries = QueryHandler::new(provider, config);
//!     let mut app = CryptoAgentApp::new(queries, TerminalSurface::stdout(TerminalOptions::default()));
//!
//!     app.submit_query("What is Bitcoin?").await?;
//!     app.show_trends("BTC")?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod chart;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod prompts;
pub mod query;
pub mod series;
pub mod symbol;
pub mod terminal;

#[cfg(test)]
mod test_support;

pub use app::CryptoAgentApp;
pub use chart::TrendChart;
pub use commands::Command;
pub use config::CryptoConfig;
pub use display::{DisplaySurface, Status};
pub use error::{CryptoError, Result};
pub use query::{QueryHandler, QueryOutcome};
pub use series::{PricePoint, PriceSeries, SeriesSummary, generate};
pub use symbol::{SeriesParams, Symbol};
pub use terminal::{TerminalOptions, TerminalSurface};
