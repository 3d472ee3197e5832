//! Route registrar
//!
//! Binds every URL path to exactly one resource. The table is filled once
//! at startup; binding the same path twice is a startup error.

use std::collections::BTreeMap;

use axum::{routing::MethodRouter, Router};

use crate::{error::AppError, state::AppState};

/// Route registration errors
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("path {path} is already bound to resource {existing}")]
    DuplicatePath {
        path: &'static str,
        existing: &'static str,
    },
}

/// Path to resource bindings plus the router they produce
#[derive(Default)]
pub struct RouteTable {
    router: Router<AppState>,
    bindings: BTreeMap<&'static str, &'static str>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `path` to `resource`, served by the given method router
    pub fn register(
        &mut self,
        path: &'static str,
        resource: &'static str,
        route: MethodRouter<AppState>,
    ) -> Result<(), RegistrationError> {
        if let Some(existing) = self.bindings.get(path) {
            return Err(RegistrationError::DuplicatePath {
                path,
                existing: *existing,
            });
        }

        self.bindings.insert(path, resource);
        let router = std::mem::take(&mut self.router);
        self.router = router.route(path, route.fallback(method_not_allowed));

        tracing::trace!(path, resource, "Registered route");
        Ok(())
    }

    /// Resource bound to a path
    pub fn resource(&self, path: &str) -> Option<&'static str> {
        self.bindings.get(path).copied()
    }

    /// All bound paths in lexical order
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bindings.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn into_router(self) -> Router<AppState> {
        self.router
    }
}

/// Answer verbs a resource does not implement
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
