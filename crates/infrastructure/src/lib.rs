//! Infrastructure layer - Configuration, adapters, and the transcript queue
//!
//! Loads layered configuration, adapts the ai_core and ai_speech clients to
//! the application ports, and implements the file-backed transcript queue.

pub mod adapters;
pub mod config;
pub mod transcript_queue;

pub use adapters::{RetryCompletionAdapter, SpeechAdapter};
pub use config::{AppConfig, ConfigError, CorrectorConfig, ServerConfig, SessionConfig, TranscriptQueueConfig};
pub use transcript_queue::FileTranscriptQueue;
