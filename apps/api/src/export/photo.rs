//! Profile photo intake: validated image bytes become a `data:` URI that is
//! stored opaquely in `PersonalInfo::photo`.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::errors::AppError;

pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

pub fn to_data_uri(content_type: &str, bytes: &[u8]) -> Result<String, AppError> {
    let mime = content_type.trim().to_ascii_lowercase();
    if !mime.starts_with("image/") || mime.len() == "image/".len() {
        return Err(AppError::Validation(format!(
            "Photo must be an image, got '{content_type}'"
        )));
    }
    if bytes.is_empty() {
        return Err(AppError::Validation("Photo is empty".to_string()));
    }
    if bytes.len() > MAX_PHOTO_BYTES {
        return Err(AppError::Validation(format!(
            "Photo exceeds {} MiB",
            MAX_PHOTO_BYTES / (1024 * 1024)
        )));
    }
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}
