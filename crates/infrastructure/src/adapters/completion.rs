//! Completion port adapter

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use ai_core::{
    CompletionConfig, CompletionEngine, CompletionError, CompletionOutcome,
    RetryingCompletionClient,
};
use application::CompletionPort;

/// Exposes the retrying completion client as the application's
/// [`CompletionPort`]
pub struct RetryCompletionAdapter {
    inner: RetryingCompletionClient,
}

impl RetryCompletionAdapter {
    /// Wrap an engine using the retry policy from `config`
    pub fn new(engine: Arc<dyn CompletionEngine>, config: &CompletionConfig) -> Self {
        Self {
            inner: RetryingCompletionClient::new(
                engine,
                config.max_attempts,
                Duration::from_millis(config.retry_delay_ms),
                config.fallback_text.clone(),
            ),
        }
    }

    /// Build the adapter with a Groq engine straight from configuration
    pub fn from_config(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let engine = Arc::new(ai_core::GroqClient::new(config.clone())?);
        Ok(Self::new(engine, config))
    }
}

#[async_trait]
impl CompletionPort for RetryCompletionAdapter {
    async fn complete_with_fallback(&self, prompt: &str) -> CompletionOutcome {
        self.inner.complete_with_fallback(prompt).await
    }
}
