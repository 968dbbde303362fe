use actix_multipart::Multipart;
use futures_util::StreamExt;
use serde::Deserialize;

use hp_core::errors::ValidationError;
use hp_core::services::{PhotoUpload, MAX_PHOTO_BYTES};

/// Query string of `GET /professores`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Form field carrying the profile photo
pub const PHOTO_FIELD: &str = "foto";

/// Pull the `foto` part out of a `multipart/form-data` body
///
/// Other parts are skipped. Reading stops one byte past the photo limit, so
/// an oversized part is still rejected by [`PhotoUpload::validate`] without
/// buffering the whole of it.
pub async fn read_photo_form(mut form: Multipart) -> Result<PhotoUpload, ValidationError> {
    while let Some(item) = form.next().await {
        let mut field = item.map_err(invalid_form)?;

        let disposition = field.content_disposition();
        if disposition.get_name() != Some(PHOTO_FIELD) {
            continue;
        }
        let filename = disposition.get_filename().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk.map_err(invalid_form)?);
            if bytes.len() > MAX_PHOTO_BYTES {
                break;
            }
        }

        return Ok(PhotoUpload {
            filename,
            content_type,
            bytes,
        });
    }

    Err(ValidationError::field(PHOTO_FIELD, "is required"))
}

fn invalid_form(error: actix_multipart::MultipartError) -> ValidationError {
    ValidationError::message(format!("Invalid multipart form: {}", error))
}
