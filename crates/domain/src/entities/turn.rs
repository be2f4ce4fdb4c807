//! A single turn in a conversation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// Text received from the client
    User,
    /// Text produced by the assistant
    Assistant,
}

impl Speaker {
    /// Single-letter prefix used when rendering history into a prompt
    pub const fn prompt_prefix(self) -> &'static str {
        match self {
            Self::User => "U",
            Self::Assistant => "A",
        }
    }
}

/// One utterance by either side of the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Unique turn identifier
    pub id: Uuid,
    /// Who spoke
    pub speaker: Speaker,
    /// What was said
    pub text: String,
    /// When the turn was recorded
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Create a turn, rejecting empty or whitespace-only text
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyText("turn text".to_string()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            speaker,
            text,
            timestamp: Utc::now(),
        })
    }

    /// Create a user turn
    pub fn user(text: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Speaker::User, text)
    }

    /// Create an assistant turn
    pub fn assistant(text: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Speaker::Assistant, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_user_turn() {
        let turn = Turn::user("Hola").unwrap();
        assert_eq!(turn.speaker, Speaker::User);
        assert_eq!(turn.text, "Hola");
    }

    #[test]
    fn creates_assistant_turn() {
        let turn = Turn::assistant("Buenas tardes").unwrap();
        assert_eq!(turn.speaker, Speaker::Assistant);
    }

    #[test]
    fn rejects_empty_text() {
        assert!(Turn::user("").is_err());
        assert!(Turn::user("   ").is_err());
        assert!(Turn::assistant("\n\t").is_err());
    }

    #[test]
    fn prompt_prefixes() {
        assert_eq!(Speaker::User.prompt_prefix(), "U");
        assert_eq!(Speaker::Assistant.prompt_prefix(), "A");
    }

    #[test]
    fn turns_get_distinct_ids() {
        let a = Turn::user("uno").unwrap();
        let b = Turn::user("dos").unwrap();
        assert_ne!(a.id, b.id);
    }
}
