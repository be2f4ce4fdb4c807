//! Shared application state

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use application::ConversationService;

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The conversation orchestrator
    pub conversation_service: Arc<ConversationService>,
    /// Kill switch; when false `/conversar` answers 503
    pub service_enabled: Arc<AtomicBool>,
    /// Upper bound on one exchange end to end
    pub request_timeout: Duration,
}

impl AppState {
    /// Build state around a service, with the kill switch initially `enabled`
    pub fn new(
        conversation_service: Arc<ConversationService>,
        enabled: bool,
        request_timeout: Duration,
    ) -> Self {
        Self {
            conversation_service,
            service_enabled: Arc::new(AtomicBool::new(enabled)),
            request_timeout,
        }
    }

    /// Current kill-switch position
    pub fn is_enabled(&self) -> bool {
        self.service_enabled.load(Ordering::SeqCst)
    }
}
