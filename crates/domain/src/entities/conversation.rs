//! Conversation aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::turn::{Speaker, Turn};
use crate::errors::DomainError;
use crate::value_objects::SessionId;

/// Ordered history of turns for one session.
///
/// Turns are appended strictly in user/assistant pairs so the history
/// rendered into prompts always alternates. An optional `max_turns` bound
/// drops the oldest turns once the history grows past it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Session this history belongs to
    pub session_id: SessionId,
    /// Turns in arrival order, oldest first
    turns: Vec<Turn>,
    /// Upper bound on retained turns, `None` means unbounded
    max_turns: Option<usize>,
    /// When the conversation was created
    pub created_at: DateTime<Utc>,
    /// When the last exchange was appended
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Create an empty, unbounded conversation
    pub fn new(session_id: SessionId) -> Self {
        Self::with_limit(session_id, None)
    }

    /// Create an empty conversation keeping at most `max_turns` turns
    pub fn with_limit(session_id: SessionId, max_turns: Option<usize>) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            turns: Vec::new(),
            max_turns,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record one completed exchange: the user's text followed by the
    /// assistant's reply. The pair is appended atomically; a failed reply
    /// never leaves a dangling user turn in history.
    pub fn append_exchange(
        &mut self,
        user_text: impl Into<String>,
        assistant_text: impl Into<String>,
    ) -> Result<(), DomainError> {
        let user = Turn::user(user_text)?;
        let assistant = Turn::assistant(assistant_text)?;
        self.turns.push(user);
        self.turns.push(assistant);
        self.trim();
        self.updated_at = Utc::now();
        Ok(())
    }

    fn trim(&mut self) {
        if let Some(max) = self.max_turns {
            // Drop whole pairs so history keeps alternating
            let max = max.saturating_sub(max % 2);
            if self.turns.len() > max {
                let excess = self.turns.len() - max;
                self.turns.drain(..excess);
            }
        }
    }

    /// All retained turns, oldest first
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of retained turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True when no exchange has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render history as prompt lines, one `U: ...` or `A: ...` per turn
    pub fn history_lines(&self) -> String {
        self.turns
            .iter()
            .map(|t| format!("{}: {}", t.speaker.prompt_prefix(), t.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conv() -> Conversation {
        Conversation::new(SessionId::new("test"))
    }

    #[test]
    fn starts_empty() {
        let c = conv();
        assert!(c.is_empty());
        assert_eq!(c.history_lines(), "");
    }

    #[test]
    fn append_records_pair_in_order() {
        let mut c = conv();
        c.append_exchange("Hola", "Buenas, ¿en qué le ayudo?").unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.turns()[0].speaker, Speaker::User);
        assert_eq!(c.turns()[1].speaker, Speaker::Assistant);
    }

    #[test]
    fn history_lines_use_speaker_prefixes() {
        let mut c = conv();
        c.append_exchange("Hola", "Buenas").unwrap();
        c.append_exchange("¿Cómo está?", "Muy bien").unwrap();
        assert_eq!(
            c.history_lines(),
            "U: Hola\nA: Buenas\nU: ¿Cómo está?\nA: Muy bien"
        );
    }

    #[test]
    fn empty_side_rejects_whole_exchange() {
        let mut c = conv();
        assert!(c.append_exchange("Hola", "  ").is_err());
        assert!(c.append_exchange("", "Buenas").is_err());
        // Nothing half-written
        assert!(c.is_empty());
    }

    #[test]
    fn bounded_conversation_drops_oldest_pairs() {
        let mut c = Conversation::with_limit(SessionId::new("test"), Some(4));
        c.append_exchange("uno", "r1").unwrap();
        c.append_exchange("dos", "r2").unwrap();
        c.append_exchange("tres", "r3").unwrap();
        assert_eq!(c.len(), 4);
        assert_eq!(c.turns()[0].text, "dos");
        assert_eq!(c.turns()[3].text, "r3");
    }

    #[test]
    fn odd_limit_rounds_down_to_pairs() {
        let mut c = Conversation::with_limit(SessionId::new("test"), Some(3));
        c.append_exchange("uno", "r1").unwrap();
        c.append_exchange("dos", "r2").unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.turns()[0].text, "dos");
    }

    #[test]
    fn unbounded_keeps_everything() {
        let mut c = conv();
        for i in 0..50 {
            c.append_exchange(format!("u{i}"), format!("a{i}")).unwrap();
        }
        assert_eq!(c.len(), 100);
    }
}
