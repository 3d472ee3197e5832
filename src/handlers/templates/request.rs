//! Template request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_TEMPLATE_NAME_LENGTH};

/// List templates query parameters
#[derive(Debug, Deserialize)]
pub struct ListTemplatesQuery {
    pub name: Option<String>,
    pub provider: Option<i32>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Create template request (also the format of template files)
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct CreateTemplateRequest {
    #[validate(length(min = 1, max = MAX_TEMPLATE_NAME_LENGTH))]
    pub name: String,

    /// Provider: 0 azure, 1 docker
    pub provider: i32,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    /// Provider specific environment definition
    #[serde(default)]
    pub content: serde_json::Value,
}

/// Update template request
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct UpdateTemplateRequest {
    pub id: i64,

    #[validate(length(min = 1, max = MAX_TEMPLATE_NAME_LENGTH))]
    pub name: Option<String>,

    pub provider: Option<i32>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub content: Option<serde_json::Value>,
}
