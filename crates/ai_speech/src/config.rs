//! Speech synthesis configuration

use serde::{Deserialize, Serialize};

use crate::error::SpeechError;
use crate::types::{AudioFormat, VoiceParams};

/// Settings for the edge-tts synthesis sidecar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Base URL of the synthesis service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Neural voice name
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Speaking rate adjustment
    #[serde(default = "default_rate")]
    pub rate: String,

    /// Pitch adjustment
    #[serde(default = "default_pitch")]
    pub pitch: String,

    /// Audio container format to request
    #[serde(default = "default_format")]
    pub format: AudioFormat,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:5500".to_string()
}

fn default_voice() -> String {
    "es-CO-SalomeNeural".to_string()
}

fn default_rate() -> String {
    "+18%".to_string()
}

fn default_pitch() -> String {
    "+13Hz".to_string()
}

const fn default_format() -> AudioFormat {
    AudioFormat::Mp3
}

const fn default_timeout_ms() -> u64 {
    20_000
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            voice: default_voice(),
            rate: default_rate(),
            pitch: default_pitch(),
            format: default_format(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SpeechConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), SpeechError> {
        if self.base_url.is_empty() {
            return Err(SpeechError::Configuration(
                "base_url cannot be empty".to_string(),
            ));
        }
        if self.voice.is_empty() {
            return Err(SpeechError::Configuration(
                "voice cannot be empty".to_string(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(SpeechError::Configuration(
                "timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Voice parameters as sent on the wire
    pub fn voice_params(&self) -> VoiceParams {
        VoiceParams {
            voice: self.voice.clone(),
            rate: self.rate.clone(),
            pitch: self.pitch.clone(),
        }
    }
}
