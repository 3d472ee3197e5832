//! Template handler implementations

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    constants::template_provider,
    error::{AppError, AppResult},
    handlers::common::{page_params, read_files, AppJson, AppQuery, IdQuery, MessageResponse},
    middleware::AuthenticatedUser,
    models::Template,
    services::TemplateScope,
    state::AppState,
    utils::validate_choice,
};

use super::{
    request::{CreateTemplateRequest, ListTemplatesQuery, UpdateTemplateRequest},
    response::TemplatesListResponse,
};

/// Get a template by id
pub async fn get_template(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<Json<Template>> {
    state
        .templates()
        .get_template(query.id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Template {}", query.id)))
}

/// Create a template
pub async fn create_template(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    AppJson(payload): AppJson<CreateTemplateRequest>,
) -> AppResult<(StatusCode, Json<Template>)> {
    payload.validate()?;
    validate_choice("provider", payload.provider, template_provider::ALL)?;

    let template = state
        .templates()
        .create_template(user.id, None, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(template)))
}

/// Update a template created by the current user
pub async fn update_template(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    AppJson(payload): AppJson<UpdateTemplateRequest>,
) -> AppResult<Json<Template>> {
    payload.validate()?;
    if let Some(provider) = payload.provider {
        validate_choice("provider", provider, template_provider::ALL)?;
    }

    Ok(Json(
        state
            .templates()
            .update_template(TemplateScope::Creator(user.id), payload)
            .await?,
    ))
}

/// Delete a template created by the current user
pub async fn delete_template(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<Json<MessageResponse>> {
    state
        .templates()
        .delete_template(TemplateScope::Creator(user.id), query.id)
        .await?;

    Ok(Json(MessageResponse::new("template deleted")))
}

/// Create a template from an uploaded JSON definition
pub async fn create_template_from_file(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<Template>)> {
    let file = read_files(multipart)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::InvalidInput("No template file uploaded".to_string()))?;

    let template = state
        .templates()
        .create_template_from_file(user.id, file)
        .await?;

    Ok((StatusCode::CREATED, Json(template)))
}

/// List templates (paginated)
pub async fn list_templates(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListTemplatesQuery>,
) -> AppResult<Json<TemplatesListResponse>> {
    let (page, per_page) = page_params(query.page, query.per_page);

    let (templates, total) = state
        .templates()
        .list_templates(query.name, query.provider, page, per_page)
        .await?;

    Ok(Json(TemplatesListResponse {
        templates,
        total,
        page,
        per_page,
    }))
}
