//! Azure management certificate model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Management certificate uploaded for an Azure subscription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub id: i64,
    pub hackathon_name: String,
    pub subscription_id: String,
    pub management_host: String,
    pub cert_url: String,
    pub fingerprint: String,
    pub create_time: DateTime<Utc>,
}
