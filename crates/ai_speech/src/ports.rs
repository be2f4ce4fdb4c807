//! Text-to-speech port

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::AudioData;

/// Abstraction over a speech synthesis backend
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize `text` into encoded audio
    async fn synthesize(&self, text: &str) -> Result<AudioData, SpeechError>;

    /// Check whether the backend is reachable
    async fn health_check(&self) -> Result<(), SpeechError>;
}
