//! Completion engine port

use async_trait::async_trait;

use crate::error::CompletionError;

/// Token accounting reported by the backend, when available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt
    pub prompt_tokens: u32,
    /// Tokens produced in the completion
    pub completion_tokens: u32,
    /// Total billed tokens
    pub total_tokens: u32,
}

/// A single successful completion
#[derive(Debug, Clone)]
pub struct Completion {
    /// The generated text
    pub content: String,
    /// Model that produced it
    pub model: String,
    /// Backend-reported usage, if the API returned it
    pub usage: Option<TokenUsage>,
}

/// Abstraction over a chat completion backend
#[async_trait]
pub trait CompletionEngine: Send + Sync {
    /// Run one completion attempt for a fully rendered prompt
    async fn complete(&self, prompt: &str) -> Result<Completion, CompletionError>;

    /// Check whether the backend is reachable
    async fn health_check(&self) -> Result<(), CompletionError>;

    /// Model this engine is configured for
    fn model_name(&self) -> &str;
}
