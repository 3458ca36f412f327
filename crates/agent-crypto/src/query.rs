//! Chat query handler
//!
//! Sends one user question to the chat-completion provider under the fixed
//! crypto system prompt. Each call is independent: no history, no cache, no
//! retry.

use crate::config::CryptoConfig;
use crate::error::{CryptoError, Result};
use crate::prompts::CRYPTO_AGENT_INSTRUCTIONS;
use agent_llm::{CompletionRequest, LLMProvider, Message};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Shown when the question box is empty
pub const EMPTY_QUERY_WARNING: &str = "Please enter a query.";

/// Shown for any failed or empty answer; details only go to the log
pub const FAILURE_MESSAGE: &str = "Could not retrieve information. Please try again.";

/// What the user should see after submitting a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The model's answer
    Answered(String),
    /// Input rejected before any network call
    Rejected(&'static str),
    /// The remote call failed or produced nothing
    Failed(&'static str),
}

/// Forwards questions to the configured chat model
pub struct QueryHandler {
    provider: Arc<dyn LLMProvider>,
    config: Arc<CryptoConfig>,
}

impl QueryHandler {
    pub fn new(provider: Arc<dyn LLMProvider>, config: Arc<CryptoConfig>) -> Self {
        Self { provider, config }
    }

    /// Trimmed query text, or [`CryptoError::EmptyQuery`]
    pub fn validate_query(text: &str) -> Result<&str> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CryptoError::EmptyQuery);
        }
        Ok(text)
    }

    fn build_request(&self, query: &str) -> CompletionRequest {
        CompletionRequest::builder(self.config.model.as_str())
            .system(CRYPTO_AGENT_INSTRUCTIONS)
            .add_message(Message::user(query))
            .max_tokens(self.config.max_tokens)
            .build()
    }

    /// Ask the model one question and return its answer text.
    #[instrument(skip(self, query), fields(model = %self.config.model))]
    pub async fn ask(&self, query: &str) -> Result<String> {
        let query = Self::validate_query(query)?;

        let response = self.provider.complete(self.build_request(query)).await?;

        if let Some(usage) = response.usage {
            info!(tokens = usage.total(), "Answer received");
        }

        response
            .text()
            .map(str::to_string)
            .ok_or(CryptoError::EmptyAnswer)
    }

    /// Like [`QueryHandler::ask`], folding every error into a user-facing outcome.
    pub async fn handle(&self, query: &str) -> QueryOutcome {
        match self.ask(query).await {
            Ok(answer) => QueryOutcome::Answered(answer),
            Err(CryptoError::EmptyQuery) => QueryOutcome::Rejected(EMPTY_QUERY_WARNING),
            Err(e) => {
                warn!(error = %e, "Query failed");
                QueryOutcome::Failed(FAILURE_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockProvider, test_config as config};
    use agent_llm::{CompletionResponse, LLMError, StopReason, TokenUsage};

    fn answer(text: &str) -> CompletionResponse {
        CompletionResponse {
            message: Message::assistant(text),
            stop_reason: StopReason::EndTurn,
            usage: Some(TokenUsage {
                input_tokens: 120,
                output_tokens: 30,
            }),
        }
    }

    #[test]
    fn test_validate_query() {
        assert_eq!(QueryHandler::validate_query("  What is DeFi? ").unwrap(), "What is DeFi?");
        assert!(matches!(
            QueryHandler::validate_query(" \n\t "),
            Err(CryptoError::EmptyQuery)
        ));
    }

    #[tokio::test]
    async fn test_ask_sends_system_prompt_and_query() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .times(1)
            .withf(|req| {
                req.model == "gemini-2.0-flash"
                    && req.system.as_deref() == Some(CRYPTO_AGENT_INSTRUCTIONS)
                    && req.messages == vec![Message::user("What is Bitcoin?")]
            })
            .returning(|_| Ok(answer("Bitcoin is a decentralized digital currency.")));

        let handler = QueryHandler::new(Arc::new(provider), config());
        let result = handler.ask("  What is Bitcoin?  ").await.unwrap();
        assert_eq!(result, "Bitcoin is a decentralized digital currency.");
    }

    #[tokio::test]
    async fn test_empty_query_makes_no_call() {
        let mut provider = MockProvider::new();
        provider.expect_complete().times(0);

        let handler = QueryHandler::new(Arc::new(provider), config());
        assert_eq!(
            handler.handle("   ").await,
            QueryOutcome::Rejected(EMPTY_QUERY_WARNING)
        );
    }

    #[tokio::test]
    async fn test_provider_error_is_generic_failure() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .times(1)
            .returning(|_| Err(LLMError::RequestFailed("HTTP 500: boom".to_string())));

        let handler = QueryHandler::new(Arc::new(provider), config());
        assert_eq!(
            handler.handle("Explain Ethereum").await,
            QueryOutcome::Failed(FAILURE_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_blank_answer_is_failure() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .times(1)
            .returning(|_| Ok(answer("   ")));

        let handler = QueryHandler::new(Arc::new(provider), config());
        assert!(matches!(
            handler.ask("What are NFTs?").await,
            Err(CryptoError::EmptyAnswer)
        ));
    }

    #[tokio::test]
    async fn test_answer_outcome() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .returning(|_| Ok(answer("NFTs are unique tokens.")));

        let handler = QueryHandler::new(Arc::new(provider), config());
        assert_eq!(
            handler.handle("What are NFTs?").await,
            QueryOutcome::Answered("NFTs are unique tokens.".to_string())
        );
    }
}
