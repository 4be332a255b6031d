use std::error::Error;
use std::fmt;

use crate::constants::{DATA_URI_BASE64_MARKER, DATA_URI_PREFIX};
use crate::utils::{decode_base64, encode_base64};

#[derive(Debug, PartialEq, Eq)]
pub enum DataUriError {
    MissingPrefix,
    MissingSeparator,
    InvalidPayload(String),
}

impl fmt::Display for DataUriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataUriError::MissingPrefix => write!(f, "Data URI must start with '{}'", DATA_URI_PREFIX),
            DataUriError::MissingSeparator => {
                write!(f, "Data URI has no '{}' separator", DATA_URI_BASE64_MARKER)
            }
            DataUriError::InvalidPayload(msg) => write!(f, "Invalid base64 payload: {}", msg),
        }
    }
}

impl Error for DataUriError {}

/// An inline image: `data:image/<subtype>;base64,<payload>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime_subtype: String,
    pub payload: String,
}

impl DataUri {
    pub fn from_bytes(mime_subtype: &str, data: &[u8]) -> Self {
        Self {
            mime_subtype: mime_subtype.to_string(),
            payload: encode_base64(data),
        }
    }

    pub fn parse(uri: &str) -> Result<Self, DataUriError> {
        let rest = uri
            .strip_prefix(DATA_URI_PREFIX)
            .ok_or(DataUriError::MissingPrefix)?;
        let (subtype, payload) = rest
            .split_once(DATA_URI_BASE64_MARKER)
            .ok_or(DataUriError::MissingSeparator)?;

        Ok(Self {
            mime_subtype: subtype.to_string(),
            payload: payload.to_string(),
        })
    }

    /// Pulls the data URI out of a generated `const NAME = "...";` line.
    pub fn from_source(source: &str) -> Result<Self, DataUriError> {
        let start = source.find(DATA_URI_PREFIX).ok_or(DataUriError::MissingPrefix)?;
        let literal = &source[start..];
        let end = literal.find('"').unwrap_or(literal.len());
        Self::parse(&literal[..end])
    }

    pub fn decode_payload(&self) -> Result<Vec<u8>, DataUriError> {
        decode_base64(&self.payload).map_err(|e| DataUriError::InvalidPayload(e.to_string()))
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            DATA_URI_PREFIX, self.mime_subtype, DATA_URI_BASE64_MARKER, self.payload
        )
    }
}
