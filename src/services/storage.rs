//! File storage
//!
//! Uploaded hackathon images and attachments are written to a local
//! directory and served under a public URL prefix.

use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    config::StorageConfig,
    error::{AppError, AppResult},
    models::{StoredFile, UploadedFile},
    utils::{sanitize_file_name, validation::validate_storage_key},
};

/// Storage backend for uploaded files
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Persist a file under a fresh key
    async fn save(&self, file: UploadedFile) -> AppResult<StoredFile>;

    /// Remove a file; returns false if the key is unknown
    async fn delete(&self, key: &str) -> AppResult<bool>;
}

/// Storage backed by a local directory
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
    public_url: String,
}

impl LocalFileStorage {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root: config.root_path.clone(),
            public_url: config.public_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn save(&self, file: UploadedFile) -> AppResult<StoredFile> {
        let key = format!(
            "{}-{}",
            Uuid::new_v4().simple(),
            sanitize_file_name(&file.file_name)
        );

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&key), &file.bytes).await?;

        tracing::debug!(key = %key, size = file.bytes.len(), "Stored uploaded file");

        Ok(StoredFile {
            url: format!("{}/{}", self.public_url, key),
            size: file.bytes.len() as u64,
            content_type: file.content_type,
            key,
        })
    }

    async fn delete(&self, key: &str) -> AppResult<bool> {
        validate_storage_key(key).map_err(|e| AppError::Validation(e.to_string()))?;

        match tokio::fs::remove_file(self.root.join(key)).await {
            Ok(()) => {
                tracing::debug!(key = %key, "Deleted stored file");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
