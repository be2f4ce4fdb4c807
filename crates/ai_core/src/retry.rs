//! Retry wrapper around a completion engine

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::ports::{Completion, CompletionEngine};

/// Result of running a prompt through the retry policy.
///
/// Exhaustion is not an error at this level: the caller still gets a reply
/// to speak, it is just the canned fallback instead of a model completion.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutcome {
    /// The model answered within the attempt budget
    Completed(String),
    /// Every attempt failed; carries the configured fallback reply
    Exhausted(String),
}

impl CompletionOutcome {
    /// The text to present to the user, regardless of outcome
    pub fn reply_text(&self) -> &str {
        match self {
            Self::Completed(text) | Self::Exhausted(text) => text,
        }
    }

    /// True when the reply came from the model rather than the fallback
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Runs prompts against an engine with a fixed-delay retry policy,
/// degrading to a fallback reply once attempts are exhausted.
pub struct RetryingCompletionClient {
    engine: Arc<dyn CompletionEngine>,
    max_attempts: u32,
    retry_delay: Duration,
    fallback_text: String,
}

impl RetryingCompletionClient {
    /// Wrap an engine with the given retry policy.
    ///
    /// `max_attempts` of zero is treated as one attempt.
    pub fn new(
        engine: Arc<dyn CompletionEngine>,
        max_attempts: u32,
        retry_delay: Duration,
        fallback_text: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            max_attempts: max_attempts.max(1),
            retry_delay,
            fallback_text: fallback_text.into(),
        }
    }

    /// Run the prompt, retrying transient failures, and always produce a
    /// reply. The last completion attempt is not followed by a delay.
    #[instrument(skip(self, prompt), fields(max_attempts = self.max_attempts))]
    pub async fn complete_with_fallback(&self, prompt: &str) -> CompletionOutcome {
        for attempt in 1..=self.max_attempts {
            match self.engine.complete(prompt).await {
                Ok(Completion { content, .. }) => {
                    debug!(attempt, "Completion succeeded");
                    return CompletionOutcome::Completed(content);
                }
                Err(error) => {
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        %error,
                        "Completion attempt failed"
                    );
                    if attempt < self.max_attempts {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }
        warn!("All completion attempts exhausted, returning fallback reply");
        CompletionOutcome::Exhausted(self.fallback_text.clone())
    }
}
