//! Ports to the outside world used by application services

use async_trait::async_trait;

use ai_core::CompletionOutcome;

use crate::error::ApplicationError;

/// Completion backend as seen by the conversation flow: always answers,
/// possibly with a degraded fallback reply.
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Run a rendered prompt through the retry policy
    async fn complete_with_fallback(&self, prompt: &str) -> CompletionOutcome;
}

/// Speech synthesis as seen by the conversation flow
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Synthesize text into encoded audio bytes
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ApplicationError>;
}

/// Source of pending transcriptions produced out-of-band
#[async_trait]
pub trait TranscriptQueuePort: Send + Sync {
    /// Take the oldest pending transcription, if any
    async fn pop(&self) -> Option<String>;
}
