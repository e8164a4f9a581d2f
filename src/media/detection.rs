#[must_use]
pub fn detect_mime(data: &[u8]) -> Option<String> {
    infer::get(data).map(|info| info.mime_type().to_string())
}

#[must_use]
pub fn detect_mime_from_extension(filename: &str) -> Option<String> {
    let ext = filename.rsplit('.').next()?;
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => Some(mime::IMAGE_JPEG.to_string()),
        "png" => Some(mime::IMAGE_PNG.to_string()),
        "gif" => Some(mime::IMAGE_GIF.to_string()),
        "webp" => Some("image/webp".into()),
        "heic" => Some("image/heic".into()),
        _ => None,
    }
}

/// Magic bytes win over the extension; unknown data falls back to
/// `application/octet-stream`.
#[must_use]
pub fn detect_image_mime(data: &[u8], filename: Option<&str>) -> String {
    detect_mime(data)
        .or_else(|| filename.and_then(detect_mime_from_extension))
        .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string())
}

#[must_use]
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type
        .parse::<mime::Mime>()
        .is_ok_and(|m| m.type_() == mime::IMAGE)
}
