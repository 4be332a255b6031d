use base64::{engine::general_purpose, Engine as _};

/// Standard base64 (RFC 4648 alphabet, padded).
pub fn encode_base64(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

pub fn decode_base64(payload: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(payload)
}
