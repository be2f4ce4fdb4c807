//! Glain HTTP presentation layer
//!
//! Exposes the conversation backend over HTTP: a liveness endpoint and the
//! `/conversar` exchange endpoint.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod tasks;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
pub use tasks::spawn_transcript_polling;
