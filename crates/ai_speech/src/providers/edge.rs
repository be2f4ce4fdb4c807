//! edge-tts sidecar provider

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{AudioData, VoiceParams};

/// Client for an edge-tts HTTP sidecar.
///
/// The sidecar exposes `POST /synthesize` taking the text plus voice
/// parameters and answering with the encoded audio bytes. Output is staged
/// through a temp file that is removed when the handle drops, so a failed
/// synthesis never leaves partial audio on disk.
#[derive(Debug)]
pub struct EdgeTtsProvider {
    client: reqwest::Client,
    config: SpeechConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    voice: &'a str,
    rate: &'a str,
    pitch: &'a str,
    format: &'a str,
}

impl EdgeTtsProvider {
    /// Build a provider from validated configuration
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SpeechError::Configuration(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/synthesize", self.config.base_url.trim_end_matches('/'))
    }

    /// Synthesize with per-call voice parameters, falling back to the
    /// configured defaults when `params` is `None`
    #[instrument(skip(self, text, params), fields(text_len = text.len()))]
    pub async fn synthesize_with(
        &self,
        text: &str,
        params: Option<&VoiceParams>,
    ) -> Result<AudioData, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "cannot synthesize empty text".to_string(),
            ));
        }

        let body = SynthesisRequest {
            text,
            voice: params.map_or(&self.config.voice, |p| &p.voice),
            rate: params.map_or(&self.config.rate, |p| &p.rate),
            pitch: params.map_or(&self.config.pitch, |p| &p.pitch),
            format: self.config.format.extension(),
        };

        let response = self.client.post(self.endpoint()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(SpeechError::SynthesisFailed(format!(
                "service answered {status}: {message}"
            )));
        }

        let audio_bytes = response.bytes().await?;

        // Stage through a temp file so we only hand back audio that made
        // it to disk intact; the file disappears when the handle drops.
        let temp = tempfile::Builder::new()
            .prefix("glain-tts-")
            .suffix(&format!(".{}", self.config.format.extension()))
            .tempfile()?;
        tokio::fs::write(temp.path(), &audio_bytes).await?;
        let bytes = tokio::fs::read(temp.path()).await?;

        if let Err(e) = temp.close() {
            warn!(error = %e, "Failed to remove synthesis temp file");
        }

        if bytes.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "service produced no audio".to_string(),
            ));
        }

        debug!(audio_bytes = bytes.len(), "Synthesis complete");
        Ok(AudioData::new(bytes, self.config.format))
    }
}

#[async_trait]
impl TextToSpeech for EdgeTtsProvider {
    async fn synthesize(&self, text: &str) -> Result<AudioData, SpeechError> {
        self.synthesize_with(text, None).await
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<(), SpeechError> {
        let url = format!("{}/health", self.config.base_url.trim_end_matches('/'));
        let response = self.client.get(url).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(SpeechError::NotAvailable(format!(
                "health check answered {}",
                response.status()
            )))
        }
    }
}
