//! Business logic services
//!
//! Each manager is a trait so handlers can be exercised against mocks; the
//! in-memory implementations share one [`Store`].

pub mod admin_service;
pub mod auth_service;
pub mod azure_cert_service;
pub mod experiment_service;
pub mod hackathon_service;
pub mod register_service;
pub mod storage;
pub mod team_service;
pub mod template_service;
pub mod user_service;

use std::sync::Arc;

pub use admin_service::{AdminManager, AdminService};
pub use auth_service::AuthService;
pub use azure_cert_service::{AzureCertManager, AzureCertService};
pub use experiment_service::{ExperimentManager, ExperimentService};
pub use hackathon_service::{HackathonManager, HackathonService};
pub use register_service::{RegisterManager, RegisterService};
pub use storage::{FileStorage, LocalFileStorage};
pub use team_service::{TeamManager, TeamService};
pub use template_service::{TemplateManager, TemplateScope, TemplateService};
pub use user_service::{UserManager, UserService};

use crate::{config::Config, db::Store};

/// Manager implementations handed to the application state
#[derive(Clone)]
pub struct Managers {
    pub hackathons: Arc<dyn HackathonManager>,
    pub registrations: Arc<dyn RegisterManager>,
    pub templates: Arc<dyn TemplateManager>,
    pub certificates: Arc<dyn AzureCertManager>,
    pub admins: Arc<dyn AdminManager>,
    pub users: Arc<dyn UserManager>,
    pub teams: Arc<dyn TeamManager>,
    pub experiments: Arc<dyn ExperimentManager>,
}

impl Managers {
    /// Wire every manager to the same store
    pub fn in_memory(store: Store, storage: Arc<dyn FileStorage>, config: &Config) -> Self {
        let super_admins = config.admin.super_admin_ids.clone();

        Self {
            hackathons: Arc::new(HackathonService::new(
                store.clone(),
                storage,
                super_admins.clone(),
            )),
            registrations: Arc::new(RegisterService::new(store.clone())),
            templates: Arc::new(TemplateService::new(store.clone())),
            certificates: Arc::new(AzureCertService::new(store.clone(), &config.azure)),
            admins: Arc::new(AdminService::new(store.clone(), super_admins)),
            users: Arc::new(UserService::new(store.clone())),
            teams: Arc::new(TeamService::new(store.clone())),
            experiments: Arc::new(ExperimentService::new(store, &config.guacamole)),
        }
    }
}
