//! Audio value types

use serde::{Deserialize, Serialize};

/// Encoded audio container formats the synthesis service can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// MPEG layer 3
    Mp3,
    /// Waveform audio
    Wav,
    /// Ogg Vorbis
    Ogg,
}

impl AudioFormat {
    /// File extension without the leading dot
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::Ogg => "ogg",
        }
    }

    /// MIME type for HTTP responses
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::Ogg => "audio/ogg",
        }
    }
}

/// Synthesized audio with its format
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Raw encoded bytes
    pub bytes: Vec<u8>,
    /// Container format of `bytes`
    pub format: AudioFormat,
}

impl AudioData {
    /// Wrap raw bytes in a given format
    pub const fn new(bytes: Vec<u8>, format: AudioFormat) -> Self {
        Self { bytes, format }
    }

    /// Length in bytes
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the clip carries no audio
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Voice shaping parameters passed to the synthesis service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceParams {
    /// Neural voice name, e.g. `es-CO-SalomeNeural`
    pub voice: String,
    /// Speaking rate adjustment, e.g. `+18%`
    pub rate: String,
    /// Pitch adjustment, e.g. `+13Hz`
    pub pitch: String,
}
