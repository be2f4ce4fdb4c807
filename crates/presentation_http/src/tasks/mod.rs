//! Background tasks

mod transcript_polling;

pub use transcript_polling::spawn_transcript_polling;
