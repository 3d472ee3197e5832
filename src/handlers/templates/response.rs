//! Template response DTOs

use serde::Serialize;

use crate::models::Template;

/// Templates list response
#[derive(Debug, Serialize)]
pub struct TemplatesListResponse {
    pub templates: Vec<Template>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
