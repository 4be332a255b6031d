use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum EmbedError {
    /// Input missing, unreadable or permission-denied.
    Read { path: PathBuf, source: std::io::Error },
    /// Output directory missing, unwritable or disk full.
    Write { path: PathBuf, source: std::io::Error },
}

impl EmbedError {
    pub fn path(&self) -> &PathBuf {
        match self {
            EmbedError::Read { path, .. } | EmbedError::Write { path, .. } => path,
        }
    }
}

impl fmt::Display for EmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbedError::Read { path, source } => {
                write!(f, "Failed to read input '{}': {}", path.display(), source)
            }
            EmbedError::Write { path, source } => {
                write!(f, "Failed to write output '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for EmbedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmbedError::Read { source, .. } | EmbedError::Write { source, .. } => Some(source),
        }
    }
}

pub type EmbedResult<T> = Result<T, EmbedError>;
