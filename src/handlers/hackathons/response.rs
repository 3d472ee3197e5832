//! Hackathon response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Hackathon, Registration};

/// Hackathons list response
#[derive(Debug, Serialize)]
pub struct HackathonsListResponse {
    pub hackathons: Vec<Hackathon>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Registration as shown to anyone: no contact details
#[derive(Debug, Serialize)]
pub struct RegistrationSummary {
    pub id: i64,
    pub user_id: i64,
    pub status: i32,
    pub create_time: DateTime<Utc>,
}

impl From<Registration> for RegistrationSummary {
    fn from(registration: Registration) -> Self {
        Self {
            id: registration.id,
            user_id: registration.user_id,
            status: registration.status,
            create_time: registration.create_time,
        }
    }
}
