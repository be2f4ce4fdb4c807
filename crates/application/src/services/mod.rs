//! Application services

mod conversation_service;
mod phonetic_corrector;
mod prompt_builder;
mod session_store;

pub use conversation_service::{ConversationReply, ConversationService, TokenCounts};
pub use phonetic_corrector::PhoneticCorrector;
pub use prompt_builder::PromptBuilder;
pub use session_store::SessionStore;
