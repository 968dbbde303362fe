//! Profile photo uploads

use async_trait::async_trait;

use crate::errors::{DomainError, ValidationError};

/// Largest accepted photo, in bytes
pub const MAX_PHOTO_BYTES: usize = 2 * 1024 * 1024;

/// An uploaded file as received from the client
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        errors.add_if(self.bytes.is_empty(), "foto", "is required");
        errors.add_if(self.bytes.len() > MAX_PHOTO_BYTES, "foto", "must be at most 2MB");
        errors.add_if(
            !self.content_type.to_ascii_lowercase().starts_with("image/"),
            "foto",
            "must be an image",
        );
        errors.into_result()
    }
}

/// Where uploaded photos end up; returns the public URL of the stored file
#[async_trait]
pub trait PhotoStorage: Send + Sync {
    async fn store(&self, upload: &PhotoUpload) -> Result<String, DomainError>;
}

#[cfg(any(test, feature = "mocks"))]
pub use mock::MockPhotoStorage;

#[cfg(any(test, feature = "mocks"))]
mod mock {
    use super::*;
    use tokio::sync::Mutex;

    /// Keeps uploads in memory and hands out fake URLs
    #[derive(Default)]
    pub struct MockPhotoStorage {
        stored: Mutex<Vec<PhotoUpload>>,
    }

    impl MockPhotoStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn stored(&self) -> Vec<PhotoUpload> {
            self.stored.lock().await.clone()
        }
    }

    #[async_trait]
    impl PhotoStorage for MockPhotoStorage {
        async fn store(&self, upload: &PhotoUpload) -> Result<String, DomainError> {
            let url = format!("http://localhost:8080/uploads/{}", upload.filename);
            self.stored.lock().await.push(upload.clone());
            Ok(url)
        }
    }
}
