mod embedder;
pub use embedder::*;

pub mod mime;
