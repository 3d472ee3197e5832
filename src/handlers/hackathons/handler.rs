//! Hackathon handler implementations

use axum::{extract::State, Json};

use crate::{
    constants::hackathon_status,
    error::AppResult,
    handlers::common::{page_params, AppQuery},
    middleware::{AuthenticatedUser, CurrentHackathon},
    models::{Hackathon, HackathonStat, Team, Template},
    state::AppState,
    utils::validate_choice,
};

use super::{
    request::{ListHackathonsQuery, TeamNameQuery},
    response::{HackathonsListResponse, RegistrationSummary},
};

/// The hackathon named by the request header
pub async fn get_hackathon(CurrentHackathon(hackathon): CurrentHackathon) -> Json<Hackathon> {
    Json(hackathon)
}

/// List hackathons (paginated)
pub async fn list_hackathons(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListHackathonsQuery>,
) -> AppResult<Json<HackathonsListResponse>> {
    if let Some(status) = query.status {
        validate_choice("status", status, hackathon_status::ALL)?;
    }
    let (page, per_page) = page_params(query.page, query.per_page);

    let (hackathons, total) = state
        .hackathons()
        .list_hackathons(query.name, query.status, page, per_page)
        .await?;

    Ok(Json(HackathonsListResponse {
        hackathons,
        total,
        page,
        per_page,
    }))
}

/// Registration, team and experiment counts
pub async fn get_hackathon_stat(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
) -> AppResult<Json<HackathonStat>> {
    Ok(Json(state.hackathons().get_hackathon_stat(hackathon.id).await?))
}

/// Teams of the hackathon, optionally filtered by name
pub async fn list_hackathon_teams(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppQuery(query): AppQuery<TeamNameQuery>,
) -> AppResult<Json<Vec<Team>>> {
    Ok(Json(
        state.teams().list_teams(hackathon.id, query.name).await?,
    ))
}

/// Who registered to the hackathon; contact details stay on the admin list
pub async fn list_hackathon_registrations(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
) -> AppResult<Json<Vec<RegistrationSummary>>> {
    let registrations = state
        .registrations()
        .get_all_registration_by_hackathon_id(hackathon.id)
        .await?;

    Ok(Json(
        registrations
            .into_iter()
            .map(RegistrationSummary::from)
            .collect(),
    ))
}

/// Templates the current user may start experiments from
pub async fn get_user_templates(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    CurrentHackathon(hackathon): CurrentHackathon,
) -> AppResult<Json<Vec<Template>>> {
    Ok(Json(
        state
            .templates()
            .get_user_templates(user.id, hackathon.id)
            .await?,
    ))
}
