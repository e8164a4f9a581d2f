pub mod detection;

pub use detection::{detect_image_mime, detect_mime, detect_mime_from_extension, is_image_mime};

use crate::error::ImageError;
use std::fs;
use std::path::Path;

/// Read an image file and confirm it actually is one before it goes anywhere
/// near the upload path. Non-image content is rejected with the detected
/// MIME type in the error.
pub fn read_image(path: &Path) -> Result<Vec<u8>, ImageError> {
    let bytes = fs::read(path)?;
    let filename = path.file_name().and_then(|name| name.to_str());
    let mime_type = detect_image_mime(&bytes, filename);
    if !is_image_mime(&mime_type) {
        return Err(ImageError::NotAnImage(mime_type));
    }
    Ok(bytes)
}
