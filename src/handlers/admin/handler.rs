//! Admin handler implementations

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    constants::{
        admin_role, experiment_status, hackathon_status, registration_status, template_provider,
    },
    error::{AppError, AppResult},
    handlers::{
        common::{read_files, AppJson, AppQuery, IdQuery, MessageResponse},
        templates::request::{CreateTemplateRequest, UpdateTemplateRequest},
    },
    middleware::{AuthenticatedUser, CurrentHackathon},
    models::{
        Certificate, Experiment, Hackathon, HackathonAdmin, Registration, StoredFile, Template,
    },
    services::TemplateScope,
    state::AppState,
    utils::validate_choice,
};

use super::{
    request::{
        AdminStartExperimentRequest, CheckNameQuery, CreateAdminRequest,
        CreateCertificateRequest, CreateHackathonRequest, CreateRegistrationRequest,
        DeleteCertificateRequest, ExperimentListQuery, FileKeyQuery, HackathonTemplateRequest,
        TemplateIdQuery, UpdateAdminRequest, UpdateCertificateRequest, UpdateHackathonRequest,
        UpdateRegistrationRequest,
    },
    response::CertificateUrlResponse,
};

// Hackathon

/// The hackathon named by the request header
pub async fn get_hackathon(CurrentHackathon(hackathon): CurrentHackathon) -> Json<Hackathon> {
    Json(hackathon)
}

/// Create a new hackathon owned by the current user
pub async fn create_hackathon(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    AppJson(payload): AppJson<CreateHackathonRequest>,
) -> AppResult<(StatusCode, Json<Hackathon>)> {
    payload.validate()?;

    let hackathon = state
        .hackathons()
        .create_new_hackathon(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(hackathon)))
}

/// Update the current hackathon
pub async fn update_hackathon(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<UpdateHackathonRequest>,
) -> AppResult<Json<Hackathon>> {
    payload.validate()?;
    if let Some(status) = payload.status {
        validate_choice("status", status, hackathon_status::ALL)?;
    }

    Ok(Json(
        state
            .hackathons()
            .update_hackathon(hackathon.id, payload)
            .await?,
    ))
}

/// `true` if no hackathon uses the name yet
pub async fn check_name(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<CheckNameQuery>,
) -> AppResult<Json<bool>> {
    let existing = state.hackathons().get_hackathon_by_name(&query.name).await?;

    Ok(Json(existing.is_none()))
}

/// Hackathons the current user administers
pub async fn list_permitted_hackathons(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<Vec<Hackathon>>> {
    Ok(Json(
        state
            .hackathons()
            .get_permitted_hackathon_list_by_admin_user_id(user.id)
            .await?,
    ))
}

// Registration

pub async fn get_registration(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<Json<Registration>> {
    state
        .registrations()
        .get_registration_by_id(query.id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("not found".to_string()))
}

/// Register a user to the current hackathon
pub async fn create_registration(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<CreateRegistrationRequest>,
) -> AppResult<(StatusCode, Json<Registration>)> {
    payload.validate()?;
    if let Some(status) = payload.status {
        validate_choice("status", status, registration_status::ALL)?;
    }

    let registration = state
        .registrations()
        .create_registration(hackathon.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(registration)))
}

/// Audit or edit a registration
pub async fn update_registration(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<UpdateRegistrationRequest>,
) -> AppResult<Json<Registration>> {
    payload.validate()?;
    if let Some(status) = payload.status {
        validate_choice("status", status, registration_status::ALL)?;
    }

    Ok(Json(
        state
            .registrations()
            .update_registration(hackathon.id, payload)
            .await?,
    ))
}

pub async fn delete_registration(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<Json<MessageResponse>> {
    state
        .registrations()
        .delete_registration(hackathon.id, query.id)
        .await?;

    Ok(Json(MessageResponse::new("registration deleted")))
}

pub async fn list_registrations(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
) -> AppResult<Json<Vec<Registration>>> {
    Ok(Json(
        state
            .registrations()
            .get_all_registration_by_hackathon_id(hackathon.id)
            .await?,
    ))
}

// Templates

/// Templates offered by the current hackathon
pub async fn list_hackathon_templates(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
) -> AppResult<Json<Vec<Template>>> {
    Ok(Json(
        state
            .templates()
            .get_templates_by_hackathon(hackathon.id)
            .await?,
    ))
}

/// Create a template and offer it in the current hackathon
pub async fn create_hackathon_template(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<CreateTemplateRequest>,
) -> AppResult<(StatusCode, Json<Template>)> {
    payload.validate()?;
    validate_choice("provider", payload.provider, template_provider::ALL)?;

    let template = state
        .templates()
        .create_template(user.id, Some(hackathon.id), payload)
        .await?;

    Ok((StatusCode::CREATED, Json(template)))
}

/// Update a template offered by the current hackathon
pub async fn update_hackathon_template(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<UpdateTemplateRequest>,
) -> AppResult<Json<Template>> {
    payload.validate()?;
    if let Some(provider) = payload.provider {
        validate_choice("provider", provider, template_provider::ALL)?;
    }

    Ok(Json(
        state
            .templates()
            .update_template(TemplateScope::Hackathon(hackathon.id), payload)
            .await?,
    ))
}

pub async fn delete_hackathon_template(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<Json<MessageResponse>> {
    state
        .templates()
        .delete_template(TemplateScope::Hackathon(hackathon.id), query.id)
        .await?;

    Ok(Json(MessageResponse::new("template deleted")))
}

/// Offer an existing template in the current hackathon
pub async fn add_template(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<HackathonTemplateRequest>,
) -> AppResult<Json<Template>> {
    Ok(Json(
        state
            .templates()
            .add_template_to_hackathon(hackathon.id, payload.template_id)
            .await?,
    ))
}

pub async fn remove_template(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppQuery(query): AppQuery<TemplateIdQuery>,
) -> AppResult<Json<MessageResponse>> {
    state
        .templates()
        .remove_template_from_hackathon(hackathon.id, query.template_id)
        .await?;

    Ok(Json(MessageResponse::new("template removed from hackathon")))
}

// Azure certificates

pub async fn get_certificates(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
) -> AppResult<Json<Vec<Certificate>>> {
    state
        .certificates()
        .get_certificates(&hackathon.name)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("no certificates".to_string()))
}

/// Create the certificate of a subscription
///
/// Manager failures are answered here with a 500 naming the cause instead
/// of going through the shared error mapping.
pub async fn create_certificate(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<CreateCertificateRequest>,
) -> AppResult<Json<CertificateUrlResponse>> {
    payload.validate()?;

    match state
        .certificates()
        .create_certificate(
            &payload.subscription_id,
            &payload.management_host,
            &hackathon.name,
        )
        .await
    {
        Ok(azure_cert_url) => Ok(Json(CertificateUrlResponse { azure_cert_url })),
        Err(e) => {
            tracing::error!(hackathon = %hackathon.name, error = %e, "Failed to create certificate");
            Err(AppError::OperationFailed(format!(
                "fail to create certificate due to [{e}]"
            )))
        }
    }
}

pub async fn update_certificate(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<UpdateCertificateRequest>,
) -> AppResult<Json<Certificate>> {
    payload.validate()?;

    Ok(Json(
        state
            .certificates()
            .update_certificate(
                &hackathon.name,
                payload.certificate_id,
                &payload.management_host,
            )
            .await?,
    ))
}

pub async fn delete_certificate(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<DeleteCertificateRequest>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = state
        .certificates()
        .delete_certificate(&hackathon.name, payload.certificate_id)
        .await?;

    if !deleted {
        tracing::warn!(
            hackathon = %hackathon.name,
            certificate_id = payload.certificate_id,
            "Certificate was not deleted"
        );
        return Err(AppError::OperationFailed(
            "fail to delete certificate".to_string(),
        ));
    }

    Ok(Json(MessageResponse::new("certificate deleted")))
}

// Files

/// Upload hackathon images and attachments
pub async fn upload_files(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<Vec<StoredFile>>)> {
    let files = read_files(multipart).await?;
    let stored = state.hackathons().upload_files(files).await?;

    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn delete_file(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<FileKeyQuery>,
) -> AppResult<Json<MessageResponse>> {
    if !state.hackathons().delete_file(&query.key).await? {
        return Err(AppError::NotFound(format!("File {}", query.key)));
    }

    Ok(Json(MessageResponse::new("file deleted")))
}

// Experiments

/// Start an experiment on behalf of the hackathon
pub async fn start_experiment(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<AdminStartExperimentRequest>,
) -> AppResult<Json<Experiment>> {
    payload.validate()?;

    Ok(Json(
        state
            .experiments()
            .admin_start_experiment(hackathon.id, payload)
            .await?,
    ))
}

pub async fn stop_experiment(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<Json<Experiment>> {
    Ok(Json(
        state
            .experiments()
            .admin_stop_experiment(hackathon.id, query.id)
            .await?,
    ))
}

pub async fn list_experiments(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppQuery(query): AppQuery<ExperimentListQuery>,
) -> AppResult<Json<Vec<Experiment>>> {
    if let Some(status) = query.status {
        validate_choice("status", status, experiment_status::ALL)?;
    }

    Ok(Json(
        state
            .experiments()
            .list_hackathon_experiments(hackathon.id, query.status)
            .await?,
    ))
}

// Administrators

pub async fn list_admins(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
) -> AppResult<Json<Vec<HackathonAdmin>>> {
    Ok(Json(
        state.admins().get_hackathon_admins(hackathon.id).await?,
    ))
}

pub async fn get_admin(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<Json<HackathonAdmin>> {
    state
        .admins()
        .get_admin(hackathon.id, query.id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Administrator {}", query.id)))
}

/// Add an administrator or judge
pub async fn create_admin(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<CreateAdminRequest>,
) -> AppResult<(StatusCode, Json<HackathonAdmin>)> {
    payload.validate()?;
    validate_choice("role_type", payload.role_type, admin_role::ALL)?;

    let admin = state.admins().create_admin(hackathon.id, payload).await?;

    Ok((StatusCode::CREATED, Json(admin)))
}

pub async fn update_admin(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppJson(payload): AppJson<UpdateAdminRequest>,
) -> AppResult<Json<HackathonAdmin>> {
    payload.validate()?;
    if let Some(role_type) = payload.role_type {
        validate_choice("role_type", role_type, admin_role::ALL)?;
    }

    Ok(Json(
        state.admins().update_admin(hackathon.id, payload).await?,
    ))
}

pub async fn delete_admin(
    State(state): State<AppState>,
    CurrentHackathon(hackathon): CurrentHackathon,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<Json<MessageResponse>> {
    state.admins().delete_admin(hackathon.id, query.id).await?;

    Ok(Json(MessageResponse::new("administrator deleted")))
}
