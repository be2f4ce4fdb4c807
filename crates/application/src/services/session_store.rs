//! In-memory session store

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::debug;

use domain::{Conversation, SessionId};

/// Handle to one session's conversation.
///
/// The inner async mutex is held across the whole read-history, complete,
/// append sequence, which is what serializes concurrent requests for the
/// same session.
pub type SessionHandle = Arc<Mutex<Conversation>>;

/// Keeps one conversation per session id, created on first use.
///
/// The outer lock only guards the map itself and is never held across an
/// await point.
#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, SessionHandle>>,
    max_turns: Option<usize>,
}

impl SessionStore {
    /// Create a store whose conversations keep at most `max_turns` turns,
    /// `None` for unbounded
    pub fn new(max_turns: Option<usize>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_turns,
        }
    }

    /// Get the handle for a session, creating an empty conversation on
    /// first access
    pub fn get_or_create(&self, session_id: &SessionId) -> SessionHandle {
        if let Some(handle) = self.sessions.read().get(session_id) {
            return Arc::clone(handle);
        }
        let mut sessions = self.sessions.write();
        // A racing writer may have created it between the locks
        Arc::clone(sessions.entry(session_id.clone()).or_insert_with(|| {
            debug!(session_id = %session_id, "New session created");
            Arc::new(Mutex::new(Conversation::with_limit(
                session_id.clone(),
                self.max_turns,
            )))
        }))
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// True when no session exists yet
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_access_creates_empty_conversation() {
        let store = SessionStore::new(None);
        let handle = store.get_or_create(&SessionId::new("a"));
        assert!(handle.lock().await.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn same_id_returns_same_conversation() {
        let store = SessionStore::new(None);
        let first = store.get_or_create(&SessionId::new("a"));
        first.lock().await.append_exchange("hola", "buenas").unwrap();

        let second = store.get_or_create(&SessionId::new("a"));
        assert_eq!(second.lock().await.len(), 2);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn different_ids_are_isolated() {
        let store = SessionStore::new(None);
        let a = store.get_or_create(&SessionId::new("a"));
        a.lock().await.append_exchange("hola", "buenas").unwrap();

        let b = store.get_or_create(&SessionId::new("b"));
        assert!(b.lock().await.is_empty());
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn store_limit_applies_to_new_conversations() {
        let store = SessionStore::new(Some(2));
        let handle = store.get_or_create(&SessionId::new("a"));
        let mut conv = handle.lock().await;
        conv.append_exchange("uno", "r1").unwrap();
        conv.append_exchange("dos", "r2").unwrap();
        assert_eq!(conv.len(), 2);
        assert_eq!(conv.turns()[0].text, "dos");
    }

    #[tokio::test]
    async fn concurrent_access_to_one_session_serializes() {
        let store = Arc::new(SessionStore::new(None));
        let mut tasks = Vec::new();
        for i in 0..10 {
            let store = Arc::clone(&store);
            tasks.push(tokio::spawn(async move {
                let handle = store.get_or_create(&SessionId::new("shared"));
                let mut conv = handle.lock().await;
                conv.append_exchange(format!("u{i}"), format!("a{i}")).unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }
        let handle = store.get_or_create(&SessionId::new("shared"));
        assert_eq!(handle.lock().await.len(), 20);
        assert_eq!(store.len(), 1);
    }
}
