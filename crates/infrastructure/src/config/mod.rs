//! Layered application configuration
//!
//! Values come from an optional TOML file overlaid with `GLAIN_*`
//! environment variables (`__` as the section separator), so
//! `GLAIN_SERVER__PORT=8080` overrides `[server] port`.

mod server;

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use ai_core::CompletionConfig;
use ai_speech::SpeechConfig;

pub use server::ServerConfig;

/// Environment variable prefix for overrides
const ENV_PREFIX: &str = "GLAIN";

/// Default configuration file name, resolved relative to the working dir
const DEFAULT_CONFIG_FILE: &str = "glain";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file or environment could not be read or parsed
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values parsed but failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Phonetic corrector settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorConfig {
    /// Disable correction entirely when false
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Minimum normalized similarity for a word to be corrected
    #[serde(default = "default_cutoff")]
    pub cutoff: f64,

    /// Deployment-specific terms added to the built-in vocabulary
    #[serde(default)]
    pub extra_vocabulary: Vec<String>,
}

/// Session memory settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Cap on retained turns per session, unbounded when absent
    #[serde(default)]
    pub max_turns: Option<usize>,
}

/// File-backed transcript queue settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptQueueConfig {
    /// Start the polling task when true
    #[serde(default)]
    pub enabled: bool,

    /// Path of the pending-transcriptions JSON file
    #[serde(default = "default_queue_path")]
    pub path: String,

    /// Seconds between polls
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

const fn default_true() -> bool {
    true
}

const fn default_cutoff() -> f64 {
    0.8
}

fn default_queue_path() -> String {
    "transcripciones_temp.json".to_string()
}

const fn default_poll_interval() -> u64 {
    5
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cutoff: default_cutoff(),
            extra_vocabulary: Vec::new(),
        }
    }
}

impl Default for TranscriptQueueConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_queue_path(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

/// Root configuration for the backend
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat completion backend settings
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Speech synthesis settings
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Phonetic corrector settings
    #[serde(default)]
    pub corrector: CorrectorConfig,

    /// Session memory settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Transcript queue settings
    #[serde(default)]
    pub transcript_queue: TranscriptQueueConfig,
}

impl AppConfig {
    /// Load configuration from the default file name plus environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from a named file (extension optional) plus
    /// environment overrides
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: Self = settings.try_deserialize()?;

        // The Groq key is conventionally provided bare, without the prefix
        if app_config.completion.api_key.is_none()
            && let Ok(key) = env::var("GROQ_API_KEY")
            && !key.is_empty()
        {
            app_config.completion.api_key = Some(key);
        }

        app_config.validate()?;
        debug!(
            host = %app_config.server.host,
            port = app_config.server.port,
            model = %app_config.completion.model,
            "Configuration loaded"
        );
        Ok(app_config)
    }

    /// Validate all sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.completion
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.speech
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if !(0.0..=1.0).contains(&self.corrector.cutoff) {
            return Err(ConfigError::Invalid(format!(
                "corrector.cutoff must be between 0.0 and 1.0, got {}",
                self.corrector.cutoff
            )));
        }
        if self.transcript_queue.enabled && self.transcript_queue.poll_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "transcript_queue.poll_interval_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8000);
        assert!(!config.transcript_queue.enabled);
        assert!(config.session.max_turns.is_none());
    }

    #[test]
    fn enabled_queue_needs_nonzero_interval() {
        let config = AppConfig {
            transcript_queue: TranscriptQueueConfig {
                enabled: true,
                poll_interval_secs: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_from("does-not-exist-anywhere").unwrap();
        assert_eq!(config.completion.model, "llama-3.3-70b-versatile");
        assert_eq!(config.speech.voice, "es-CO-SalomeNeural");
    }
}
