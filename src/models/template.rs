//! Template model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Environment template participants start experiments from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    pub name: String,
    /// Provider: 0 azure, 1 docker
    pub provider: i32,
    pub description: Option<String>,
    /// Provider specific environment definition
    pub content: serde_json::Value,
    pub creator_id: i64,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}
