//! Template handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::routing::{get, post};

use crate::{
    handlers::registrar::{RegistrationError, RouteTable},
    state::AppState,
};

/// Template routes
pub fn register(table: &mut RouteTable, state: &AppState) -> Result<(), RegistrationError> {
    table.register(
        "/api/template",
        "Template",
        get(handler::get_template)
            .post(guarded!(state, token, handler::create_template))
            .put(guarded!(state, token, handler::update_template))
            .delete(guarded!(state, token, handler::delete_template)),
    )?;
    table.register(
        "/api/template/file",
        "TemplateFile",
        post(guarded!(state, token, handler::create_template_from_file)),
    )?;
    table.register(
        "/api/template/list",
        "TemplateList",
        get(handler::list_templates),
    )?;
    Ok(())
}
