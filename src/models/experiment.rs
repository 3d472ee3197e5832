//! Experiment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::experiment_status;

/// Connection parameters for the remote desktop gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuacamoleConfig {
    pub name: String,
    pub protocol: String,
    pub hostname: String,
    pub port: u16,
    pub password: String,
    /// Gateway URL opening this connection
    pub url: String,
}

/// Environment started by a participant from a template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experiment {
    pub id: i64,
    /// `None` for environments pre-allocated by an admin
    pub user_id: Option<i64>,
    pub hackathon_id: i64,
    pub template_id: i64,
    pub status: i32,
    pub last_heart_beat_time: DateTime<Utc>,
    pub remote: Option<GuacamoleConfig>,
    pub create_time: DateTime<Utc>,
}

impl Experiment {
    /// Starting or running
    pub fn is_alive(&self) -> bool {
        matches!(
            self.status,
            experiment_status::STARTING | experiment_status::RUNNING
        )
    }
}
