//! Chat-completion provider layer for crypto-agent
//!
//! This crate provides provider-agnostic abstractions for talking to a hosted
//! chat-completion model. It includes:
//!
//! - Message types for a single request/response exchange
//! - Completion request/response types
//! - Provider trait for LLM implementations
//! - An OpenAI-compatible HTTP provider (works with Gemini's
//!   `v1beta/openai` endpoint)

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;
pub mod providers;

// Re-export main types
pub use completion::{CompletionRequest, CompletionResponse, StopReason, TokenUsage};
pub use error::{LLMError, Result};
pub use messages::{Message, Role};
pub use provider::LLMProvider;
