pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{Config, MimeSelection};
pub use error::{EmbedError, EmbedResult};
pub use models::*;
pub use services::*;
