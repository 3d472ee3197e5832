//! User handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    handlers::common::{AppJson, AppQuery, IdQuery},
    middleware::{AuthenticatedUser, CurrentHackathon},
    models::{Experiment, GuacamoleConfig, Registration, Team, User, UserProfile},
    state::AppState,
};

use super::{
    request::{
        HeartBeatRequest, StartExperimentRequest, UpdateProfileRequest, UserRegistrationRequest,
    },
    response::UserHackathonResponse,
};

/// Current user (created on first call)
pub async fn get_user_info(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<User>> {
    Ok(Json(state.users().get_user_info(&user).await?))
}

/// Current user's profile
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<UserProfile>> {
    state
        .users()
        .get_profile(user.id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Profile".to_string()))
}

/// Update the current user's profile
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    AppJson(payload): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<UserProfile>> {
    payload.validate()?;

    Ok(Json(state.users().update_profile(user.id, payload).await?))
}

/// Remote desktop connection of the user's running experiment
pub async fn get_guacamole_config(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    CurrentHackathon(hackathon): CurrentHackathon,
) -> AppResult<Json<GuacamoleConfig>> {
    Ok(Json(
        state
            .experiments()
            .get_guacamole_config(user.id, hackathon.id)
            .await?,
    ))
}

/// The user's registration to the current hackathon
pub async fn get_registration(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    CurrentHackathon(hackathon): CurrentHackathon,
) -> AppResult<Json<Registration>> {
    state
        .registrations()
        .get_user_registration(user.id, hackathon.id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Registration".to_string()))
}

/// Register the user to the current hackathon
pub async fn register(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<UserRegistrationRequest>,
) -> AppResult<(StatusCode, Json<Registration>)> {
    payload.validate()?;

    let registration = state
        .registrations()
        .register(user.id, &hackathon, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(registration)))
}

/// Hackathons the user registered for
pub async fn list_registered_hackathons(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<Vec<UserHackathonResponse>>> {
    Ok(Json(
        state
            .registrations()
            .get_user_hackathon_list(user.id)
            .await?,
    ))
}

/// One of the user's experiments
pub async fn get_experiment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<Json<Experiment>> {
    state
        .experiments()
        .get_experiment(user.id, query.id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Experiment {}", query.id)))
}

/// Start (or resume) an experiment in the current hackathon
pub async fn start_experiment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<StartExperimentRequest>,
) -> AppResult<Json<Experiment>> {
    payload.validate()?;

    Ok(Json(
        state
            .experiments()
            .start_experiment(user.id, hackathon.id, &payload.template_name)
            .await?,
    ))
}

/// Keep an experiment alive
pub async fn heart_beat(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    AppJson(payload): AppJson<HeartBeatRequest>,
) -> AppResult<Json<Experiment>> {
    Ok(Json(
        state.experiments().heart_beat(user.id, payload.id).await?,
    ))
}

/// Stop one of the user's experiments
pub async fn stop_experiment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<Json<Experiment>> {
    Ok(Json(
        state
            .experiments()
            .stop_experiment(user.id, query.id)
            .await?,
    ))
}

pub async fn list_experiments(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<Vec<Experiment>>> {
    Ok(Json(
        state.experiments().list_user_experiments(user.id).await?,
    ))
}

pub async fn list_teams(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<Vec<Team>>> {
    Ok(Json(state.teams().list_user_teams(user.id).await?))
}
