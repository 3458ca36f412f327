//! Shared mocks for unit tests

use crate::config::CryptoConfig;
use agent_llm::{CompletionRequest, CompletionResponse, LLMProvider};
use async_trait::async_trait;
use mockall::mock;
use std::sync::Arc;

mock! {
    pub Provider {}

    #[async_trait]
    impl LLMProvider for Provider {
        async fn complete(&self, request: CompletionRequest) -> agent_llm::Result<CompletionResponse>;
        fn name(&self) -> &str;
    }
}

pub fn test_config() -> Arc<CryptoConfig> {
    Arc::new(CryptoConfig::builder().api_key("test-key").build().unwrap())
}
