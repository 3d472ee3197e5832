//! Team request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_TEAM_NAME_LENGTH};

/// Query a team by id or by name
#[derive(Debug, Deserialize)]
pub struct TeamQuery {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// Create team request
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = MAX_TEAM_NAME_LENGTH))]
    pub name: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(url)]
    pub logo: Option<String>,
}

/// Update team request
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct UpdateTeamRequest {
    pub id: i64,

    #[validate(length(min = 1, max = MAX_TEAM_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(url)]
    pub logo: Option<String>,
}

/// Join team request
#[derive(Debug, Deserialize)]
pub struct JoinTeamRequest {
    pub team_id: i64,
}

/// Approve (or reset) a member request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateMemberRequest {
    pub team_id: i64,
    pub user_id: i64,
    /// Status: 0 pending, 1 approved
    pub status: i32,
}

/// Leave a team or remove a member
#[derive(Debug, Deserialize)]
pub struct MemberQuery {
    pub team_id: i64,
    pub user_id: i64,
}

/// List members query parameters
#[derive(Debug, Deserialize)]
pub struct MemberListQuery {
    pub team_id: i64,
}

/// Hand leadership to another member
#[derive(Debug, Deserialize)]
pub struct PromoteLeaderRequest {
    pub team_id: i64,
    pub user_id: i64,
}

/// Select a template for the team's experiments
#[derive(Debug, Deserialize)]
pub struct SelectTemplateRequest {
    pub team_id: i64,
    pub template_id: i64,
}

/// `?team_id=<int>` query parameter
#[derive(Debug, Deserialize)]
pub struct TeamIdQuery {
    pub team_id: i64,
}
