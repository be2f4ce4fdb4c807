//! Speech port adapter

use std::sync::Arc;

use async_trait::async_trait;

use ai_speech::{SpeechConfig, SpeechError, TextToSpeech};
use application::{ApplicationError, SpeechPort};

/// Exposes a text-to-speech provider as the application's [`SpeechPort`],
/// flattening speech errors into application errors
pub struct SpeechAdapter {
    inner: Arc<dyn TextToSpeech>,
}

impl SpeechAdapter {
    /// Wrap an existing provider
    pub fn new(inner: Arc<dyn TextToSpeech>) -> Self {
        Self { inner }
    }

    /// Build the adapter with an edge-tts provider straight from
    /// configuration
    pub fn from_config(config: &SpeechConfig) -> Result<Self, SpeechError> {
        let provider = Arc::new(ai_speech::EdgeTtsProvider::new(config.clone())?);
        Ok(Self::new(provider))
    }
}

#[async_trait]
impl SpeechPort for SpeechAdapter {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ApplicationError> {
        let audio = self
            .inner
            .synthesize(text)
            .await
            .map_err(|e| match e {
                SpeechError::NotAvailable(m) | SpeechError::Timeout(m) => {
                    ApplicationError::ExternalService(m)
                }
                other => ApplicationError::Synthesis(other.to_string()),
            })?;
        Ok(audio.bytes)
    }
}
