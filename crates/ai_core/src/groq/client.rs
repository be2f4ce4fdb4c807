//! HTTP client for Groq's OpenAI-compatible chat completions API

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::CompletionConfig;
use crate::error::CompletionError;
use crate::ports::{Completion, CompletionEngine, TokenUsage};

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Groq in production; any server speaking the same wire format works,
/// which is what the integration tests rely on.
#[derive(Debug)]
pub struct GroqClient {
    client: reqwest::Client,
    config: CompletionConfig,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

impl GroqClient {
    /// Build a client from validated configuration
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| CompletionError::Configuration(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => request.bearer_auth(key),
            _ => request,
        }
    }
}

#[async_trait]
impl CompletionEngine for GroqClient {
    #[instrument(skip(self, prompt), fields(model = %self.config.model, prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<Completion, CompletionError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .authorize(self.client.post(self.endpoint()))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(CompletionError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyCompletion)?;

        let content = choice.message.content;
        if content.trim().is_empty() {
            return Err(CompletionError::EmptyCompletion);
        }

        debug!(
            response_len = content.len(),
            total_tokens = parsed.usage.as_ref().map(|u| u.total_tokens),
            "Completion received"
        );

        Ok(Completion {
            content,
            model: parsed.model.unwrap_or_else(|| self.config.model.clone()),
            usage: parsed.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<(), CompletionError> {
        let url = format!("{}/models", self.config.base_url.trim_end_matches('/'));
        let response = self.authorize(self.client.get(url)).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(CompletionError::ApiError {
                status: response.status().as_u16(),
                message: "health check failed".to_string(),
            })
        }
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client = GroqClient::new(CompletionConfig {
            base_url: "http://localhost:9999/v1/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9999/v1/chat/completions");
    }

    #[test]
    fn new_rejects_invalid_config() {
        let result = GroqClient::new(CompletionConfig {
            model: String::new(),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn model_name_matches_config() {
        let client = GroqClient::new(CompletionConfig::default()).unwrap();
        assert_eq!(client.model_name(), "llama-3.3-70b-versatile");
    }
}
