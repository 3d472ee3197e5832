//! Registration model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::registration_status;

/// A user's registration to a hackathon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub id: i64,
    pub user_id: i64,
    pub hackathon_id: i64,
    pub real_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: i32,
    pub remark: Option<String>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl Registration {
    /// Whether the registration lets the user take part
    pub fn is_approved(&self) -> bool {
        matches!(
            self.status,
            registration_status::AUDIT_PASSED | registration_status::AUTO_PASSED
        )
    }
}
