//! Session identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a conversation session.
///
/// Clients choose their own identifiers; the backend treats them as
/// uninterpreted keys into the session store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Session used when the client does not supply one
    pub const DEFAULT: &'static str = "default_session";

    /// Create a session id from an arbitrary string key
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The fallback session id for clients that send no identifier
    pub fn default_session() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    /// Borrow the raw key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
