//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub create_time: DateTime<Utc>,
    pub last_login_time: DateTime<Utc>,
}

impl User {
    /// Name shown to other users
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.name)
    }
}

/// Optional personal details a user fills in before registering
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub real_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub career: Option<String>,
    pub description: Option<String>,
    pub update_time: Option<DateTime<Utc>>,
}
