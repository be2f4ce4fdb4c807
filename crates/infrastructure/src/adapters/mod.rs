//! Adapters binding the ai clients to the application ports

mod completion;
mod speech;

pub use completion::RetryCompletionAdapter;
pub use speech::SpeechAdapter;
