//! Completion backend configuration

use serde::{Deserialize, Serialize};

use crate::error::CompletionError;

/// Settings for the chat completion backend and its retry policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token; requests go unauthenticated when absent
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Completion length cap
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Per-attempt request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Total attempts before giving up and returning the fallback
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Pause between attempts in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Reply returned to the user when every attempt fails
    #[serde(default = "default_fallback_text")]
    pub fallback_text: String,
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_max_tokens() -> u32 {
    150
}

const fn default_timeout_ms() -> u64 {
    30_000
}

const fn default_max_attempts() -> u32 {
    3
}

const fn default_retry_delay_ms() -> u64 {
    1_000
}

fn default_fallback_text() -> String {
    "Perdón, tuve un problema procesando su solicitud.".to_string()
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_ms: default_timeout_ms(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            fallback_text: default_fallback_text(),
        }
    }
}

impl CompletionConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), CompletionError> {
        if self.base_url.is_empty() {
            return Err(CompletionError::Configuration(
                "base_url cannot be empty".to_string(),
            ));
        }
        if self.model.is_empty() {
            return Err(CompletionError::Configuration(
                "model cannot be empty".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(CompletionError::Configuration(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(CompletionError::Configuration(
                "timeout_ms must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(CompletionError::Configuration(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }
        if self.fallback_text.trim().is_empty() {
            return Err(CompletionError::Configuration(
                "fallback_text cannot be empty".to_string(),
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
        let config = CompletionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.retry_delay_ms, 1_000);
    }

    #[test]
    fn rejects_zero_attempts() {
        let config = CompletionConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let config = CompletionConfig {
            temperature: 3.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_blank_fallback() {
        let config = CompletionConfig {
            fallback_text: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: CompletionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert!(config.api_key.is_none());
    }
}
