use crate::config::MimeSelection;
use crate::constants::DEFAULT_MIME_SUBTYPE;

/// Guess the image subtype from its magic bytes, falling back to jpeg.
pub fn sniff_image_subtype(data: &[u8]) -> &'static str {
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        "png"
    } else if data.starts_with(&[0xFF, 0xD8]) {
        "jpeg"
    } else if data.starts_with(b"GIF8") {
        "gif"
    } else if data.starts_with(b"RIFF") && data.len() >= 12 && &data[8..12] == b"WEBP" {
        "webp"
    } else if data.starts_with(b"BM") {
        "bmp"
    } else if data.starts_with(&[0x00, 0x00, 0x01, 0x00]) {
        "x-icon"
    } else {
        DEFAULT_MIME_SUBTYPE
    }
}

pub fn resolve_subtype(selection: &MimeSelection, data: &[u8]) -> String {
    match selection {
        MimeSelection::Fixed(subtype) => subtype.clone(),
        MimeSelection::Sniff => sniff_image_subtype(data).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_signatures() {
        assert_eq!(sniff_image_subtype(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A]), "png");
        assert_eq!(sniff_image_subtype(&[0xFF, 0xD8, 0xFF, 0xE0]), "jpeg");
        assert_eq!(sniff_image_subtype(b"GIF89a"), "gif");
        assert_eq!(sniff_image_subtype(b"RIFF\0\0\0\0WEBPVP8 "), "webp");
        assert_eq!(sniff_image_subtype(b"BM\0\0"), "bmp");
        assert_eq!(sniff_image_subtype(&[0, 0, 1, 0, 1, 0]), "x-icon");
    }

    #[test]
    fn test_sniff_fallback() {
        assert_eq!(sniff_image_subtype(&[]), "jpeg");
        assert_eq!(sniff_image_subtype(b"RIFF\0\0\0\0WAVE"), "jpeg");
        assert_eq!(sniff_image_subtype(b"plain text"), "jpeg");
    }

    #[test]
    fn test_fixed_ignores_content() {
        let png = [0x89, b'P', b'N', b'G'];
        assert_eq!(resolve_subtype(&MimeSelection::default(), &png), "jpeg");
        assert_eq!(resolve_subtype(&MimeSelection::Sniff, &png), "png");
    }
}
