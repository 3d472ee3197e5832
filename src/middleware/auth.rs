//! Authentication
//!
//! Bearer tokens are decoded into an [`AuthenticatedUser`] which the
//! `token_required` guard stores in the request extensions.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::AppError, services::AuthService};

/// Authenticated user extracted from JWT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub name: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Decode the bearer token carried by a request
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<AuthenticatedUser, AppError> {
    let Some(auth_header) = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()) else {
        debug!("Auth failed: No Authorization header");
        return Err(AppError::Unauthorized);
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        debug!("Auth failed: Invalid Authorization format (expected 'Bearer <token>')");
        return Err(AppError::Unauthorized);
    };

    let claims = AuthService::verify_token(token, secret).inspect_err(|e| {
        debug!(error = ?e, "Auth failed: Token verification failed");
    })?;

    let id = claims.sub.parse::<i64>().map_err(|e| {
        debug!(sub = %claims.sub, error = ?e, "Auth failed: Invalid user ID in token");
        AppError::InvalidToken
    })?;

    debug!(user_id = id, name = %claims.name, "User authenticated successfully");

    Ok(AuthenticatedUser {
        id,
        name: claims.name,
    })
}
