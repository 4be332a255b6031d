mod data_uri;
pub use data_uri::*;

use std::path::PathBuf;

/// Summary of a completed embed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedReport {
    pub input_bytes: usize,
    pub payload_len: usize,
    pub mime_subtype: String,
    pub output_path: PathBuf,
}
