use std::path::PathBuf;

use crate::constants;

/// How the MIME subtype of the generated data URI is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MimeSelection {
    /// Always use this subtype, whatever the input bytes look like.
    Fixed(String),
    /// Derive the subtype from the input's magic bytes.
    Sniff,
}

impl Default for MimeSelection {
    fn default() -> Self {
        MimeSelection::Fixed(constants::DEFAULT_MIME_SUBTYPE.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub const_name: String,
    pub mime: MimeSelection,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_paths(constants::DEFAULT_INPUT_PATH, constants::DEFAULT_OUTPUT_PATH)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            const_name: constants::CONST_NAME.to_string(),
            mime: MimeSelection::default(),
        }
    }

    pub fn sniff_mime(mut self, enabled: bool) -> Self {
        if enabled {
            self.mime = MimeSelection::Sniff;
        }
        self
    }
}
