//! Public hackathon handlers

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

/// Hackathon routes
pub fn register(table: &mut RouteTable, state: &AppState) -> Result<(), RegistrationError> {
    table.register(
        "/api/hackathon",
        "Hackathon",
        get(guarded!(state, hackathon, handler::get_hackathon)),
    )?;
    table.register(
        "/api/hackathon/list",
        "HackathonList",
        get(handler::list_hackathons),
    )?;
    table.register(
        "/api/hackathon/stat",
        "HackathonStat",
        get(guarded!(state, hackathon, handler::get_hackathon_stat)),
    )?;
    table.register(
        "/api/hackathon/team/list",
        "HackathonTeamList",
        get(guarded!(state, hackathon, handler::list_hackathon_teams)),
    )?;
    table.register(
        "/api/hackathon/registration/list",
        "HackathonRegistrationList",
        get(guarded!(state, hackathon, handler::list_hackathon_registrations)),
    )?;
    table.register(
        "/api/hackathon/template",
        "HackathonTemplate",
        get(guarded!(state, participant, handler::get_user_templates)),
    )?;
    Ok(())
}
