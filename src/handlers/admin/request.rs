//! Admin request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_DESCRIPTION_LENGTH, MAX_DISPLAY_NAME_LENGTH},
    models::HackathonBasicInfo,
};

/// Create hackathon request
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct CreateHackathonRequest {
    /// URL-safe unique name
    pub name: String,

    #[validate(length(min = 1, max = MAX_DISPLAY_NAME_LENGTH))]
    pub display_name: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub event_start_time: Option<DateTime<Utc>>,
    pub event_end_time: Option<DateTime<Utc>>,
    pub registration_start_time: Option<DateTime<Utc>>,
    pub registration_end_time: Option<DateTime<Utc>>,
    pub judge_start_time: Option<DateTime<Utc>>,
    pub judge_end_time: Option<DateTime<Utc>>,

    #[serde(default)]
    pub banners: Vec<String>,

    #[serde(default)]
    pub basic_info: HackathonBasicInfo,
}

/// Update hackathon request
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct UpdateHackathonRequest {
    #[validate(length(min = 1, max = MAX_DISPLAY_NAME_LENGTH))]
    pub display_name: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    /// Status: 0 draft, 1 online, 2 offline
    pub status: Option<i32>,

    pub event_start_time: Option<DateTime<Utc>>,
    pub event_end_time: Option<DateTime<Utc>>,
    pub registration_start_time: Option<DateTime<Utc>>,
    pub registration_end_time: Option<DateTime<Utc>>,
    pub judge_start_time: Option<DateTime<Utc>>,
    pub judge_end_time: Option<DateTime<Utc>>,
    pub banners: Option<Vec<String>>,
    pub basic_info: Option<HackathonBasicInfo>,
}

/// Hackathon name availability query
#[derive(Debug, Deserialize)]
pub struct CheckNameQuery {
    pub name: String,
}

/// Register a user to the current hackathon on their behalf
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct CreateRegistrationRequest {
    pub user_id: i64,

    #[validate(length(max = 64))]
    pub real_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    /// Defaults to audit passed
    pub status: Option<i32>,

    #[validate(length(max = 1024))]
    pub remark: Option<String>,
}

/// Update registration request (typically the audit status)
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct UpdateRegistrationRequest {
    pub id: i64,

    pub status: Option<i32>,

    #[validate(length(max = 64))]
    pub real_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    #[validate(length(max = 1024))]
    pub remark: Option<String>,
}

/// Attach a template to the current hackathon
#[derive(Debug, Deserialize)]
pub struct HackathonTemplateRequest {
    pub template_id: i64,
}

/// `?template_id=<int>` query parameter
#[derive(Debug, Deserialize)]
pub struct TemplateIdQuery {
    pub template_id: i64,
}

/// Create certificate request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCertificateRequest {
    #[validate(length(min = 1))]
    pub subscription_id: String,

    #[validate(length(min = 1))]
    pub management_host: String,
}

/// Update certificate request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCertificateRequest {
    pub certificate_id: i64,

    #[validate(length(min = 1))]
    pub management_host: String,
}

/// Delete certificate request
#[derive(Debug, Deserialize)]
pub struct DeleteCertificateRequest {
    pub certificate_id: i64,
}

/// `?key=<storage key>` query parameter
#[derive(Debug, Deserialize)]
pub struct FileKeyQuery {
    pub key: String,
}

/// Start an experiment on behalf of the hackathon
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct AdminStartExperimentRequest {
    #[validate(length(min = 1))]
    pub template_name: String,

    /// Owner of the experiment; pre-allocated when absent
    pub user_id: Option<i64>,
}

/// List experiments query parameters
#[derive(Debug, Deserialize)]
pub struct ExperimentListQuery {
    pub status: Option<i32>,
}

/// Add an administrator or judge
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct CreateAdminRequest {
    pub user_id: i64,

    /// Role: 1 admin, 2 judge
    pub role_type: i32,

    #[validate(length(max = 256))]
    pub remarks: Option<String>,
}

/// Update an administrator or judge
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct UpdateAdminRequest {
    pub id: i64,

    pub role_type: Option<i32>,

    #[validate(length(max = 256))]
    pub remarks: Option<String>,
}
