//! Speech synthesis errors

use thiserror::Error;

/// Errors from the text-to-speech backend
#[derive(Debug, Error)]
pub enum SpeechError {
    /// The synthesis service could not be reached
    #[error("Speech service unavailable: {0}")]
    NotAvailable(String),

    /// The synthesis request did not finish in time
    #[error("Synthesis timed out: {0}")]
    Timeout(String),

    /// The service answered but synthesis failed
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Local file handling around the synthesis output failed
    #[error("Audio file error: {0}")]
    FileError(#[from] std::io::Error),

    /// Configuration problem detected at startup
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::NotAvailable(err.to_string())
        } else {
            Self::SynthesisFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesis_failed_message() {
        let err = SpeechError::SynthesisFailed("no voice".to_string());
        assert_eq!(err.to_string(), "Synthesis failed: no voice");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SpeechError = io.into();
        assert!(matches!(err, SpeechError::FileError(_)));
    }
}
