//! File-backed queue of pending transcriptions
//!
//! The speech recognizer drops transcriptions into a JSON file shaped as
//! `{"transcripciones": ["...", ...]}`. Popping takes the oldest entry and
//! rewrites the file without it. Read or parse failures are logged and
//! treated as an empty queue so a corrupt file never takes the poller down.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use application::TranscriptQueuePort;

#[derive(Debug, Default, Serialize, Deserialize)]
struct QueueFile {
    #[serde(default)]
    transcripciones: Vec<String>,
}

/// Transcript queue stored in a single JSON file
#[derive(Debug)]
pub struct FileTranscriptQueue {
    path: PathBuf,
}

impl FileTranscriptQueue {
    /// Use the queue file at `path`; the file may not exist yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_queue(&self) -> Option<QueueFile> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read transcript queue");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(queue) => Some(queue),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Transcript queue file is not valid JSON");
                None
            }
        }
    }
}

#[async_trait]
impl TranscriptQueuePort for FileTranscriptQueue {
    async fn pop(&self) -> Option<String> {
        let mut queue = self.read_queue().await?;
        if queue.transcripciones.is_empty() {
            return None;
        }
        let transcript = queue.transcripciones.remove(0);

        match serde_json::to_string_pretty(&queue) {
            Ok(serialized) => {
                if let Err(e) = tokio::fs::write(&self.path, serialized).await {
                    warn!(path = %self.path.display(), error = %e, "Failed to rewrite transcript queue");
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to serialize transcript queue");
            }
        }

        let transcript = transcript.trim().to_string();
        if transcript.is_empty() {
            return None;
        }
        debug!(remaining = queue.transcripciones.len(), "Transcript popped");
        Some(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_in(dir: &tempfile::TempDir) -> FileTranscriptQueue {
        FileTranscriptQueue::new(dir.path().join("transcripciones_temp.json"))
    }

    #[tokio::test]
    async fn missing_file_is_an_empty_queue() {
        let dir = tempfile::tempdir().unwrap();
        let queue = queue_in(&dir);
        assert_eq!(queue.pop().await, None);
    }

    #[tokio::test]
    async fn pops_oldest_first_and_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let queue = queue_in(&dir);
        tokio::fs::write(
            queue.path(),
            r#"{"transcripciones": ["primera", "segunda"]}"#,
        )
        .await
        .unwrap();

        assert_eq!(queue.pop().await, Some("primera".to_string()));
        assert_eq!(queue.pop().await, Some("segunda".to_string()));
        assert_eq!(queue.pop().await, None);

        let remaining = tokio::fs::read_to_string(queue.path()).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&remaining).unwrap();
        assert!(parsed["transcripciones"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let queue = queue_in(&dir);
        tokio::fs::write(queue.path(), "not json at all").await.unwrap();
        assert_eq!(queue.pop().await, None);
    }

    #[tokio::test]
    async fn whitespace_transcripts_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let queue = queue_in(&dir);
        tokio::fs::write(queue.path(), r#"{"transcripciones": ["   "]}"#)
            .await
            .unwrap();
        // Blank entry is consumed but not delivered
        assert_eq!(queue.pop().await, None);
        assert_eq!(queue.pop().await, None);
    }

    #[tokio::test]
    async fn trims_delivered_transcripts() {
        let dir = tempfile::tempdir().unwrap();
        let queue = queue_in(&dir);
        tokio::fs::write(queue.path(), r#"{"transcripciones": ["  hola  "]}"#)
            .await
            .unwrap();
        assert_eq!(queue.pop().await, Some("hola".to_string()));
    }
}
