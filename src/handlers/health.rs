//! Health check and server time handlers

use axum::{routing::get, Json};
use serde::Serialize;

use crate::{
    handlers::registrar::{RegistrationError, RouteTable},
    utils::{epoch_millis, now_utc},
};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Server clock response
#[derive(Debug, Serialize)]
pub struct CurrentTimeResponse {
    /// Milliseconds since the Unix epoch
    pub currenttime: i64,
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Current server time, used by clients to align countdowns
async fn current_time() -> Json<CurrentTimeResponse> {
    Json(CurrentTimeResponse {
        currenttime: epoch_millis(now_utc()),
    })
}

/// Health routes
pub fn register(table: &mut RouteTable) -> Result<(), RegistrationError> {
    table.register("/", "Health", get(health_check))?;
    table.register("/health", "Health", get(health_check))?;
    table.register("/api/currenttime", "CurrentTime", get(current_time))?;
    Ok(())
}
