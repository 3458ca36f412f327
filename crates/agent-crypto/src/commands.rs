//! Command parsing for the interactive shell

use crate::error::{CryptoError, Result};

/// Parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the simulated trend chart for a symbol (may be empty)
    Trend { symbol: String },
    /// Show help
    Help,
    /// Exit the shell
    Exit,
    /// Free-text question for the model
    Query { text: String },
}

impl Command {
    /// Parse one input line.
    ///
    /// Lines not starting with `/` are questions. A bare `/trend` parses with
    /// an empty symbol so the caller can warn about it.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        let Some(rest) = input.strip_prefix('/') else {
            return Ok(Command::Query {
                text: input.to_string(),
            });
        };

        let mut parts = rest.split_whitespace();
        let cmd = parts
            .next()
            .ok_or_else(|| CryptoError::Command("Empty command".to_string()))?
            .to_lowercase();

        match cmd.as_str() {
            "trend" | "trends" | "chart" | "t" => Ok(Command::Trend {
                symbol: parts.next().unwrap_or_default().to_string(),
            }),
            "help" | "h" | "?" => Ok(Command::Help),
            "exit" | "quit" | "q" => Ok(Command::Exit),
            _ => Err(CryptoError::Command(format!("Unknown command: /{cmd}"))),
        }
    }

    /// Help text for the interactive shell
    pub fn help_text() -> &'static str {
        r"
AI Crypto Agent Commands
========================

  <question>        Ask anything about cryptocurrencies, blockchain or market trends
  /trend <symbol>   Show simulated price trends (e.g. BTC, ETH, XRP)
  /help             Show this help
  /exit             Exit

Aliases: /t = /chart = /trend, /h = /?, /q = /quit = /exit
"
    }
}
