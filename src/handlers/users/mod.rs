//! Current user handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::routing::get;

use crate::{
    handlers::registrar::{RegistrationError, RouteTable},
    state::AppState,
};

/// User routes
pub fn register(table: &mut RouteTable, state: &AppState) -> Result<(), RegistrationError> {
    table.register(
        "/api/user",
        "User",
        get(guarded!(state, token, handler::get_user_info)),
    )?;
    table.register(
        "/api/user/profile",
        "UserProfile",
        get(guarded!(state, token, handler::get_profile))
            .put(guarded!(state, token, handler::update_profile)),
    )?;
    table.register(
        "/api/user/guacamoleconfig",
        "GuacamoleConfig",
        get(guarded!(state, participant, handler::get_guacamole_config)),
    )?;
    table.register(
        "/api/user/registration",
        "UserRegistration",
        get(guarded!(state, participant, handler::get_registration))
            .post(guarded!(state, participant, handler::register)),
    )?;
    table.register(
        "/api/user/registration/list",
        "UserHackathonList",
        get(guarded!(state, token, handler::list_registered_hackathons)),
    )?;
    table.register(
        "/api/user/experiment",
        "UserExperiment",
        get(guarded!(state, token, handler::get_experiment))
            .post(guarded!(state, participant, handler::start_experiment))
            .put(guarded!(state, token, handler::heart_beat))
            .delete(guarded!(state, token, handler::stop_experiment)),
    )?;
    table.register(
        "/api/user/experiment/list",
        "UserExperimentList",
        get(guarded!(state, token, handler::list_experiments)),
    )?;
    table.register(
        "/api/user/team/list",
        "UserTeamList",
        get(guarded!(state, token, handler::list_teams)),
    )?;
    Ok(())
}
