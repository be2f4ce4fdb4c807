//! Groq chat completion backend

mod client;

pub use client::GroqClient;
