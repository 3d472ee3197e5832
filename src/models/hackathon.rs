//! Hackathon model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::hackathon_status;

/// Registration and environment settings of a hackathon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HackathonBasicInfo {
    /// Maximum number of accepted registrations (0 = unlimited)
    #[serde(default)]
    pub max_enrollment: u32,
    /// Approve registrations without an admin audit
    #[serde(default)]
    pub auto_approve: bool,
    /// Recycle idle experiments
    #[serde(default)]
    pub recycle_enabled: bool,
    #[serde(default)]
    pub location: Option<String>,
}

/// Hackathon model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hackathon {
    pub id: i64,
    /// URL-safe unique name, used by the `hackathon_name` header
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub status: i32,
    pub creator_id: i64,
    pub event_start_time: Option<DateTime<Utc>>,
    pub event_end_time: Option<DateTime<Utc>>,
    pub registration_start_time: Option<DateTime<Utc>>,
    pub registration_end_time: Option<DateTime<Utc>>,
    pub judge_start_time: Option<DateTime<Utc>>,
    pub judge_end_time: Option<DateTime<Utc>>,
    pub banners: Vec<String>,
    pub basic_info: HackathonBasicInfo,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl Hackathon {
    /// Check if the hackathon is published
    pub fn is_online(&self) -> bool {
        self.status == hackathon_status::ONLINE
    }

    /// Check if registration is open at the given instant
    pub fn is_registration_open_at(&self, now: DateTime<Utc>) -> bool {
        if !self.is_online() {
            return false;
        }

        if let Some(start) = self.registration_start_time {
            if now < start {
                return false;
            }
        }

        if let Some(end) = self.registration_end_time {
            if now > end {
                return false;
            }
        }

        true
    }
}

/// Aggregated numbers shown on a hackathon's page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HackathonStat {
    pub hackathon_id: i64,
    /// All registrations, whatever their audit status
    pub register: i64,
    /// Registrations that passed the audit
    pub audited: i64,
    pub teams: i64,
    /// Experiments currently running
    pub online: i64,
}
