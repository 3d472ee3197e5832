//! Team handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    constants::team_member_status,
    error::{AppError, AppResult},
    handlers::common::{AppJson, AppQuery, IdQuery, MessageResponse},
    middleware::{AuthenticatedUser, CurrentHackathon},
    models::{Team, TeamMember},
    state::AppState,
    utils::validate_choice,
};

use super::request::{
    CreateTeamRequest, JoinTeamRequest, MemberListQuery, MemberQuery, PromoteLeaderRequest,
    SelectTemplateRequest, TeamIdQuery, TeamQuery, UpdateMemberRequest, UpdateTeamRequest,
};

/// Get a team of the current hackathon by id or name
pub async fn get_team(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppQuery(query): AppQuery<TeamQuery>,
) -> AppResult<Json<Team>> {
    if query.id.is_none() && query.name.is_none() {
        return Err(AppError::InvalidInput(
            "either id or name is required".to_string(),
        ));
    }

    state
        .teams()
        .get_team(hackathon.id, query.id, query.name)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Team".to_string()))
}

/// Create a team led by the current user
pub async fn create_team(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<CreateTeamRequest>,
) -> AppResult<(StatusCode, Json<Team>)> {
    payload.validate()?;

    let team = state
        .teams()
        .create_team(user.id, hackathon.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(team)))
}

pub async fn update_team(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<UpdateTeamRequest>,
) -> AppResult<Json<Team>> {
    payload.validate()?;

    Ok(Json(
        state
            .teams()
            .update_team(user.id, hackathon.id, payload)
            .await?,
    ))
}

/// Dismiss a team
pub async fn dismiss_team(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<Json<MessageResponse>> {
    state
        .teams()
        .dismiss_team(user.id, hackathon.id, query.id)
        .await?;

    Ok(Json(MessageResponse::new("team dismissed")))
}

/// Ask to join a team
pub async fn join_team(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<JoinTeamRequest>,
) -> AppResult<(StatusCode, Json<TeamMember>)> {
    let member = state
        .teams()
        .join_team(user.id, hackathon.id, payload.team_id)
        .await?;

    Ok((StatusCode::CREATED, Json(member)))
}

/// Approve or reset a member (leader only)
pub async fn update_member_status(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<UpdateMemberRequest>,
) -> AppResult<Json<TeamMember>> {
    validate_choice("status", payload.status, team_member_status::ALL)?;

    Ok(Json(
        state
            .teams()
            .update_member_status(user.id, hackathon.id, payload)
            .await?,
    ))
}

/// Leave a team, or remove a member as leader
pub async fn remove_member(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppQuery(query): AppQuery<MemberQuery>,
) -> AppResult<Json<MessageResponse>> {
    state
        .teams()
        .remove_member(user.id, hackathon.id, query.team_id, query.user_id)
        .await?;

    Ok(Json(MessageResponse::new("member removed")))
}

pub async fn list_teams(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppQuery(query): AppQuery<TeamQuery>,
) -> AppResult<Json<Vec<Team>>> {
    Ok(Json(
        state.teams().list_teams(hackathon.id, query.name).await?,
    ))
}

pub async fn list_members(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<MemberListQuery>,
) -> AppResult<Json<Vec<TeamMember>>> {
    Ok(Json(state.teams().list_members(query.team_id).await?))
}

/// Hand leadership to another member
pub async fn promote_leader(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<PromoteLeaderRequest>,
) -> AppResult<Json<Team>> {
    Ok(Json(
        state
            .teams()
            .promote_leader(user.id, hackathon.id, payload.team_id, payload.user_id)
            .await?,
    ))
}

/// Choose the template the team works with
pub async fn select_template(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<SelectTemplateRequest>,
) -> AppResult<Json<Team>> {
    Ok(Json(
        state
            .teams()
            .select_template(user.id, hackathon.id, payload.team_id, payload.template_id)
            .await?,
    ))
}

pub async fn unselect_template(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppQuery(query): AppQuery<TeamIdQuery>,
) -> AppResult<Json<Team>> {
    Ok(Json(
        state
            .teams()
            .unselect_template(user.id, hackathon.id, query.team_id)
            .await?,
    ))
}
