//! Local filesystem storage for profile photos.
//!
//! Files land in a single upload directory under a random prefix and are
//! served back from `{public_base_url}/uploads/{name}`.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

use hp_core::errors::DomainError;
use hp_core::services::photo::{PhotoStorage, PhotoUpload};

use crate::InfrastructureError;

/// Stores uploaded photos in a directory on the local disk
#[derive(Debug, Clone)]
pub struct LocalDiskStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalDiskStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create the upload directory if it does not exist yet
    pub async fn ensure_root(&self) -> Result<(), InfrastructureError> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read a stored file back by the name returned in its URL
    ///
    /// Returns `Ok(None)` for unknown names and for anything that is not a
    /// plain file name inside the upload directory.
    pub async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, InfrastructureError> {
        if !is_plain_file_name(name) {
            return Ok(None);
        }

        match tokio::fs::read(self.root.join(name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn stored_name(upload: &PhotoUpload) -> String {
        let sanitized = sanitize_file_name(&upload.filename);
        let name = if sanitized.is_empty() {
            format!("foto.{}", extension_for(&upload.content_type))
        } else {
            sanitized
        };
        format!("{}-{}", Uuid::new_v4().simple(), name)
    }
}

#[async_trait]
impl PhotoStorage for LocalDiskStorage {
    async fn store(&self, upload: &PhotoUpload) -> Result<String, DomainError> {
        self.ensure_root().await?;

        let name = Self::stored_name(upload);
        tokio::fs::write(self.root.join(&name), &upload.bytes)
            .await
            .map_err(InfrastructureError::from)?;

        tracing::info!(file = %name, bytes = upload.bytes.len(), "Photo stored");
        Ok(format!("{}/uploads/{}", self.public_base_url, name))
    }
}

fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim_start_matches('.')
        .to_string()
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains('\\')
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "img",
    }
}

/// Guess a Content-Type from a stored file's extension
pub fn content_type_for(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
