//! Team model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Team of participants within one hackathon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub hackathon_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub leader_id: i64,
    /// Template selected for the team's experiments
    pub template_id: Option<i64>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

/// Membership of a user in a team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: i64,
    pub team_id: i64,
    pub user_id: i64,
    /// Status: 0 pending, 1 approved
    pub status: i32,
    pub join_time: DateTime<Utc>,
}
