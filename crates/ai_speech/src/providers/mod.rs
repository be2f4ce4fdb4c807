//! Speech synthesis providers

mod edge;

pub use edge::EdgeTtsProvider;
