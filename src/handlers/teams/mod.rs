//! Team handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::routing::{get, post, put};

use crate::{
    handlers::registrar::{RegistrationError, RouteTable},
    state::AppState,
};

/// Team routes
pub fn register(table: &mut RouteTable, state: &AppState) -> Result<(), RegistrationError> {
    table.register(
        "/api/team",
        "Team",
        get(guarded!(state, hackathon, handler::get_team))
            .post(guarded!(state, participant, handler::create_team))
            .put(guarded!(state, participant, handler::update_team))
            .delete(guarded!(state, participant, handler::dismiss_team)),
    )?;
    table.register(
        "/api/team/list",
        "TeamList",
        get(guarded!(state, hackathon, handler::list_teams)),
    )?;
    table.register(
        "/api/team/member",
        "TeamMember",
        post(guarded!(state, participant, handler::join_team))
            .put(guarded!(state, participant, handler::update_member_status))
            .delete(guarded!(state, participant, handler::remove_member)),
    )?;
    table.register(
        "/api/team/member/list",
        "TeamMemberList",
        get(handler::list_members),
    )?;
    table.register(
        "/api/team/leader",
        "TeamLeader",
        put(guarded!(state, participant, handler::promote_leader)),
    )?;
    table.register(
        "/api/team/template",
        "TeamTemplate",
        post(guarded!(state, participant, handler::select_template))
            .delete(guarded!(state, participant, handler::unselect_template)),
    )?;
    Ok(())
}
