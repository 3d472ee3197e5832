//! Extractors and DTOs shared by every resource

use axum::extract::{multipart::MultipartRejection, FromRequest, FromRequestParts, Multipart};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    models::UploadedFile,
};

/// JSON body extractor whose rejections are reported as 400 JSON errors
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string extractor whose rejections are reported as 400 JSON errors
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// `?id=<int>` query parameter
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i64,
}

/// Confirmation body for operations without a natural result
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Resolve optional paging parameters into (page, per_page)
pub fn page_params(page: Option<u32>, per_page: Option<u32>) -> (u32, u32) {
    let page = page.unwrap_or(1).max(1);
    let per_page = per_page.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    (page, per_page)
}

/// Read every file part of a multipart upload
pub async fn read_files(
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Vec<UploadedFile>> {
    let mut multipart = multipart.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        files.push(UploadedFile {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Ok(files)
}
