//! Hackathon administrator model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user holding an administrative role on a hackathon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HackathonAdmin {
    pub id: i64,
    pub user_id: i64,
    pub hackathon_id: i64,
    /// Role: 1 admin, 2 judge
    pub role_type: i32,
    pub remarks: Option<String>,
    pub create_time: DateTime<Utc>,
}
