//! Transcript queue polling background task
//!
//! Periodically drains the file-backed transcript queue and runs each
//! pending transcription through the conversation pipeline under the
//! default session.

use std::sync::Arc;
use std::time::Duration;

use application::{ConversationService, TranscriptQueuePort};
use domain::SessionId;
use tracing::{debug, info, warn};

/// Spawn a background task that polls the transcript queue.
///
/// Each poll drains everything currently queued, oldest first. Processing
/// failures are logged and the loop keeps going; the queue entry is already
/// consumed at that point, matching the at-most-once delivery of the file
/// format.
///
/// Returns a `JoinHandle` that can be used to abort the task on shutdown.
pub fn spawn_transcript_polling(
    queue: Arc<dyn TranscriptQueuePort>,
    conversation_service: Arc<ConversationService>,
    poll_interval: Duration,
) -> tokio::task::JoinHandle<()> {
    info!(
        interval_secs = poll_interval.as_secs(),
        "Starting transcript queue polling task"
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(poll_interval);
        // The first tick completes immediately; skip it so the server
        // finishes starting before the first poll.
        ticker.tick().await;

        let session = SessionId::default_session();
        loop {
            ticker.tick().await;
            drain_queue(queue.as_ref(), &conversation_service, &session).await;
        }
    })
}

/// Single poll iteration: pop until the queue is empty.
async fn drain_queue(
    queue: &dyn TranscriptQueuePort,
    conversation_service: &ConversationService,
    session: &SessionId,
) {
    while let Some(transcript) = queue.pop().await {
        debug!(transcript_len = transcript.len(), "Transcript dequeued");
        match conversation_service.handle(session, &transcript).await {
            Ok(reply) => {
                info!(
                    completed = reply.completed,
                    reply_len = reply.reply_text.len(),
                    "Queued transcript processed"
                );
            }
            Err(e) => {
                warn!(error = %e, "Failed to process queued transcript");
            }
        }
    }
}
