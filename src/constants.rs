// src/constants.rs

pub const DEFAULT_INPUT_PATH: &str = "images/logo.jpg";
pub const DEFAULT_OUTPUT_PATH: &str = "logo.js";

// Generated source
pub const CONST_NAME: &str = "LOGO_BASE64";
pub const DEFAULT_MIME_SUBTYPE: &str = "jpeg";

// Data URI pieces
pub const DATA_URI_PREFIX: &str = "data:image/";
pub const DATA_URI_BASE64_MARKER: &str = ";base64,";
