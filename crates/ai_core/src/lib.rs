//! AI Core - Chat completion client for the Glain assistant
//!
//! Talks to an OpenAI-compatible chat completions endpoint (Groq in
//! production) and wraps it in a retrying client that degrades to a fixed
//! fallback reply when every attempt fails.

pub mod config;
pub mod error;
pub mod groq;
pub mod ports;
pub mod retry;

pub use config::CompletionConfig;
pub use error::CompletionError;
pub use groq::GroqClient;
pub use ports::{Completion, CompletionEngine, TokenUsage};
pub use retry::{CompletionOutcome, RetryingCompletionClient};
