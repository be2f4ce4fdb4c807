//! Domain layer - Entities and value objects for the Glain assistant
//!
//! Pure domain types with no I/O. The conversation model is deliberately
//! small: a session owns an ordered list of turns, and turns are only ever
//! appended as user/assistant pairs.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{Conversation, Speaker, Turn};
pub use errors::DomainError;
pub use value_objects::SessionId;
