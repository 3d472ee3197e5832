//! Uploaded file models

use serde::{Deserialize, Serialize};

/// File received from a multipart request
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// File persisted by the storage backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFile {
    /// Storage key, used to delete the file
    pub key: String,
    pub url: String,
    pub size: u64,
    pub content_type: Option<String>,
}
