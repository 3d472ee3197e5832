//! Guard predicates
//!
//! Guards run before a handler body and either let the request through or
//! answer it themselves. They are layered per method handler; when several
//! apply, the order is always token → hackathon → admin privilege:
//!
//! - [`token_required`]: a valid bearer token, else 401.
//! - [`hackathon_name_required`]: the `hackathon_name` header names an
//!   existing hackathon, else 404.
//! - [`admin_privilege_required`]: the authenticated user administers the
//!   resolved hackathon, else 403. Must be layered inside the other two.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{
    constants::HACKATHON_NAME_HEADER,
    error::{AppError, AppResult},
    middleware::auth::{authenticate, AuthenticatedUser},
    models::Hackathon,
    state::AppState,
};

/// Hackathon resolved by [`hackathon_name_required`]
#[derive(Debug, Clone)]
pub struct CurrentHackathon(pub Hackathon);

impl<S> FromRequestParts<S> for CurrentHackathon
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Hackathon>()
            .cloned()
            .map(CurrentHackathon)
            .ok_or_else(|| AppError::NotFound("Hackathon".to_string()))
    }
}

/// Require a valid bearer token
pub async fn token_required(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(request.headers(), &state.config().jwt.secret).inspect_err(|_| {
        debug!(path = %request.uri().path(), "Token guard rejected request");
    })?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Require the `hackathon_name` header to name an existing hackathon
pub async fn hackathon_name_required(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let hackathon = resolve_hackathon(&state, request.headers()).await?;

    request.extensions_mut().insert(hackathon);
    Ok(next.run(request).await)
}

/// Require the authenticated user to administer the resolved hackathon
pub async fn admin_privilege_required(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let user_id = request
        .extensions()
        .get::<AuthenticatedUser>()
        .map(|user| user.id)
        .ok_or(AppError::Unauthorized)?;
    let hackathon_id = request
        .extensions()
        .get::<Hackathon>()
        .map(|hackathon| hackathon.id)
        .ok_or_else(|| AppError::NotFound("Hackathon".to_string()))?;

    if !state
        .admins()
        .validate_admin_privilege(user_id, hackathon_id)
        .await?
    {
        debug!(user_id, hackathon_id, "Admin guard rejected request");
        return Err(AppError::Forbidden(
            "Admin privilege on this hackathon required".to_string(),
        ));
    }

    Ok(next.run(request).await)
}

async fn resolve_hackathon(state: &AppState, headers: &HeaderMap) -> AppResult<Hackathon> {
    let name = headers
        .get(HACKATHON_NAME_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            debug!("Hackathon guard rejected request: no hackathon_name header");
            AppError::NotFound("Hackathon name required".to_string())
        })?;

    state
        .hackathons()
        .get_hackathon_by_name(name)
        .await?
        .ok_or_else(|| {
            debug!(hackathon = %name, "Hackathon guard rejected request: unknown hackathon");
            AppError::NotFound(format!("Hackathon {name}"))
        })
}
