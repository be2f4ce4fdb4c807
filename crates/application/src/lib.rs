//! Application layer - Use case orchestration for the Glain assistant
//!
//! Coordinates the conversation flow: phonetic correction of the incoming
//! transcription, prompt rendering from session history, completion with
//! retry/fallback, speech synthesis, and the per-session memory update.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{CompletionPort, SpeechPort, TranscriptQueuePort};
pub use services::{
    ConversationReply, ConversationService, PhoneticCorrector, PromptBuilder, SessionStore,
    TokenCounts,
};
