//! Domain entities

mod conversation;
mod turn;

pub use conversation::Conversation;
pub use turn::{Speaker, Turn};
