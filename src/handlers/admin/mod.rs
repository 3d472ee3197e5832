//! Hackathon administration handlers

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

/// Admin routes
pub fn register(table: &mut RouteTable, state: &AppState) -> Result<(), RegistrationError> {
    // Hackathon
    table.register(
        "/api/admin/hackathon",
        "AdminHackathon",
        get(guarded!(state, hackathon, handler::get_hackathon))
            .post(guarded!(state, token, handler::create_hackathon))
            .put(guarded!(state, admin, handler::update_hackathon)),
    )?;
    table.register(
        "/api/admin/hackathon/checkname",
        "HackathonCheckName",
        get(handler::check_name),
    )?;
    table.register(
        "/api/admin/hackathon/list",
        "AdminHackathonList",
        get(guarded!(state, token, handler::list_permitted_hackathons)),
    )?;

    // Registration
    table.register(
        "/api/admin/registration",
        "AdminRegistration",
        get(handler::get_registration)
            .post(guarded!(state, admin, handler::create_registration))
            .put(guarded!(state, admin, handler::update_registration))
            .delete(guarded!(state, admin, handler::delete_registration)),
    )?;
    table.register(
        "/api/admin/registration/list",
        "AdminRegistrationList",
        get(guarded!(state, admin, handler::list_registrations)),
    )?;

    // Templates
    table.register(
        "/api/admin/hackathon/template",
        "AdminHackathonTemplate",
        get(guarded!(state, hackathon, handler::list_hackathon_templates))
            .post(guarded!(state, admin, handler::create_hackathon_template))
            .put(guarded!(state, admin, handler::update_hackathon_template))
            .delete(guarded!(state, admin, handler::delete_hackathon_template)),
    )?;
    table.register(
        "/api/admin/template/list",
        "AdminTemplateList",
        get(guarded!(state, hackathon, handler::list_hackathon_templates)),
    )?;
    table.register(
        "/api/admin/template",
        "AdminTemplate",
        post(guarded!(state, admin, handler::add_template))
            .delete(guarded!(state, admin, handler::remove_template)),
    )?;

    // Azure certificates
    table.register(
        "/api/admin/azure",
        "AzureCertificate",
        get(guarded!(state, hackathon, handler::get_certificates))
            .post(guarded!(state, hackathon, handler::create_certificate))
            .put(guarded!(state, hackathon, handler::update_certificate))
            .delete(guarded!(state, hackathon, handler::delete_certificate)),
    )?;

    // Files
    table.register(
        "/api/admin/file",
        "AdminFile",
        post(guarded!(state, admin, handler::upload_files))
            .delete(guarded!(state, admin, handler::delete_file)),
    )?;

    // Experiments
    table.register(
        "/api/admin/experiment",
        "AdminExperiment",
        post(guarded!(state, admin, handler::start_experiment))
            .delete(guarded!(state, admin, handler::stop_experiment)),
    )?;
    table.register(
        "/api/admin/experiment/list",
        "AdminExperimentList",
        get(guarded!(state, admin, handler::list_experiments)),
    )?;

    // Administrators
    table.register(
        "/api/admin/hackathon/administrator/list",
        "HackathonAdminList",
        get(guarded!(state, hackathon, handler::list_admins)),
    )?;
    table.register(
        "/api/admin/hackathon/administrator",
        "HackathonAdministrator",
        get(guarded!(state, admin, handler::get_admin))
            .post(guarded!(state, admin, handler::create_admin))
            .put(guarded!(state, admin, handler::update_admin))
            .delete(guarded!(state, admin, handler::delete_admin)),
    )?;

    Ok(())
}
