//! Conversation use case orchestration

use std::sync::Arc;

use tracing::{info, instrument};

use domain::SessionId;

use crate::error::ApplicationError;
use crate::ports::{CompletionPort, SpeechPort};
use crate::services::phonetic_corrector::PhoneticCorrector;
use crate::services::prompt_builder::PromptBuilder;
use crate::services::session_store::SessionStore;

/// Whitespace-word counts reported alongside every reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCounts {
    /// Words in the corrected user text
    pub user: usize,
    /// Words in the assistant reply
    pub llm: usize,
    /// Sum of both
    pub total: usize,
}

impl TokenCounts {
    fn for_exchange(user_text: &str, reply_text: &str) -> Self {
        let user = user_text.split_whitespace().count();
        let llm = reply_text.split_whitespace().count();
        Self {
            user,
            llm,
            total: user + llm,
        }
    }
}

/// Everything produced for one exchange
#[derive(Debug, Clone)]
pub struct ConversationReply {
    /// User text after phonetic correction
    pub user_text: String,
    /// Assistant reply, possibly the degraded fallback
    pub reply_text: String,
    /// Synthesized reply audio, raw encoded bytes
    pub audio: Vec<u8>,
    /// Word counts for the exchange
    pub tokens: TokenCounts,
    /// False when the reply is the fallback rather than a model completion
    pub completed: bool,
}

/// Orchestrates one conversation exchange end to end: correction, prompt
/// rendering, completion with fallback, memory update, and synthesis.
pub struct ConversationService {
    corrector: PhoneticCorrector,
    prompt_builder: PromptBuilder,
    sessions: SessionStore,
    completion: Arc<dyn CompletionPort>,
    speech: Arc<dyn SpeechPort>,
}

impl ConversationService {
    /// Wire up the service from its collaborators
    pub fn new(
        corrector: PhoneticCorrector,
        sessions: SessionStore,
        completion: Arc<dyn CompletionPort>,
        speech: Arc<dyn SpeechPort>,
    ) -> Self {
        Self {
            corrector,
            prompt_builder: PromptBuilder,
            sessions,
            completion,
            speech,
        }
    }

    /// Handle one user message for a session.
    ///
    /// The session lock is held from history read through memory update, so
    /// concurrent requests for the same session apply their exchanges in
    /// order and each prompt sees all previously recorded pairs. History is
    /// only updated when the model actually answered; a fallback reply is
    /// still spoken and returned but leaves memory untouched.
    #[instrument(skip_all, fields(session_id = %session_id))]
    pub async fn handle(
        &self,
        session_id: &SessionId,
        raw_text: &str,
    ) -> Result<ConversationReply, ApplicationError> {
        if raw_text.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "received empty text".to_string(),
            ));
        }

        let user_text = self.corrector.correct(raw_text);

        let handle = self.sessions.get_or_create(session_id);
        let mut conversation = handle.lock().await;

        let prompt = self.prompt_builder.render(&conversation, &user_text);
        let outcome = self.completion.complete_with_fallback(&prompt).await;

        let completed = outcome.is_completed();
        let reply_text = outcome.reply_text().to_string();

        if completed {
            conversation.append_exchange(user_text.clone(), reply_text.clone())?;
        }
        drop(conversation);

        info!(
            completed,
            reply_len = reply_text.len(),
            "Exchange processed"
        );

        let audio = self.speech.synthesize(&reply_text).await?;
        let tokens = TokenCounts::for_exchange(&user_text, &reply_text);

        Ok(ConversationReply {
            user_text,
            reply_text,
            audio,
            tokens,
            completed,
        })
    }
}
