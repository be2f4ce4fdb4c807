//! AI Speech - Text-to-speech synthesis for the Glain assistant
//!
//! Wraps an edge-tts sidecar service behind the [`TextToSpeech`] port.
//! Synthesized audio is staged through a temp file and returned as raw
//! bytes for the caller to encode.

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::EdgeTtsProvider;
pub use types::{AudioData, AudioFormat, VoiceParams};
