use base64::Engine;

/// Inline `data:` URI for raw file bytes, for image previews.
pub fn preview_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime_type, encoded)
}

pub fn is_image(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_carries_mime_and_base64_payload() {
        let uri = preview_data_uri("image/png", b"abc");
        assert_eq!(uri, "data:image/png;base64,YWJj");
    }

    #[test]
    fn image_detection_is_prefix_based() {
        assert!(is_image("image/jpeg"));
        assert!(is_image("image/gif"));
        assert!(!is_image("application/pdf"));
        assert!(!is_image("text/plain"));
    }
}
