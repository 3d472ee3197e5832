//! Application state management
//!
//! The shared state handed to every handler and guard through Axum's
//! `State` extractor: the manager implementations and the configuration.

use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        AdminManager, AzureCertManager, ExperimentManager, HackathonManager, Managers,
        RegisterManager, TeamManager, TemplateManager, UserManager,
    },
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    managers: Managers,
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(managers: Managers, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { managers, config }),
        }
    }

    pub fn hackathons(&self) -> &dyn HackathonManager {
        self.inner.managers.hackathons.as_ref()
    }

    pub fn registrations(&self) -> &dyn RegisterManager {
        self.inner.managers.registrations.as_ref()
    }

    pub fn templates(&self) -> &dyn TemplateManager {
        self.inner.managers.templates.as_ref()
    }

    pub fn certificates(&self) -> &dyn AzureCertManager {
        self.inner.managers.certificates.as_ref()
    }

    pub fn admins(&self) -> &dyn AdminManager {
        self.inner.managers.admins.as_ref()
    }

    pub fn users(&self) -> &dyn UserManager {
        self.inner.managers.users.as_ref()
    }

    pub fn teams(&self) -> &dyn TeamManager {
        self.inner.managers.teams.as_ref()
    }

    pub fn experiments(&self) -> &dyn ExperimentManager {
        self.inner.managers.experiments.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
