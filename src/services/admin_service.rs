//! Hackathon administrator manager

use std::collections::HashSet;

use async_trait::async_trait;

use crate::{
    constants::admin_role,
    db::Store,
    error::{AppError, AppResult},
    handlers::admin::request::{CreateAdminRequest, UpdateAdminRequest},
    models::HackathonAdmin,
    utils::now_utc,
};

/// Hackathon administrators, judges and privilege checks
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminManager: Send + Sync {
    /// Whether the user may administer the hackathon
    async fn validate_admin_privilege(&self, user_id: i64, hackathon_id: i64) -> AppResult<bool>;

    async fn get_hackathon_admins(&self, hackathon_id: i64) -> AppResult<Vec<HackathonAdmin>>;

    async fn get_admin(&self, hackathon_id: i64, id: i64) -> AppResult<Option<HackathonAdmin>>;

    async fn create_admin(
        &self,
        hackathon_id: i64,
        req: CreateAdminRequest,
    ) -> AppResult<HackathonAdmin>;

    async fn update_admin(
        &self,
        hackathon_id: i64,
        req: UpdateAdminRequest,
    ) -> AppResult<HackathonAdmin>;

    /// Remove an administrator; the hackathon's creator cannot be removed
    async fn delete_admin(&self, hackathon_id: i64, id: i64) -> AppResult<()>;
}

/// In-memory administrator manager
pub struct AdminService {
    store: Store,
    super_admins: HashSet<i64>,
}

impl AdminService {
    pub fn new(store: Store, super_admins: HashSet<i64>) -> Self {
        Self {
            store,
            super_admins,
        }
    }
}

#[async_trait]
impl AdminManager for AdminService {
    async fn validate_admin_privilege(&self, user_id: i64, hackathon_id: i64) -> AppResult<bool> {
        if self.super_admins.contains(&user_id) {
            return Ok(true);
        }

        Ok(self.store.read().await.admins.values().any(|a| {
            a.user_id == user_id && a.hackathon_id == hackathon_id && a.role_type == admin_role::ADMIN
        }))
    }

    async fn get_hackathon_admins(&self, hackathon_id: i64) -> AppResult<Vec<HackathonAdmin>> {
        Ok(self
            .store
            .read()
            .await
            .admins
            .values()
            .filter(|a| a.hackathon_id == hackathon_id)
            .cloned()
            .collect())
    }

    async fn get_admin(&self, hackathon_id: i64, id: i64) -> AppResult<Option<HackathonAdmin>> {
        Ok(self
            .store
            .read()
            .await
            .admins
            .get(&id)
            .filter(|a| a.hackathon_id == hackathon_id)
            .cloned())
    }

    async fn create_admin(
        &self,
        hackathon_id: i64,
        req: CreateAdminRequest,
    ) -> AppResult<HackathonAdmin> {
        let mut tables = self.store.write().await;
        if tables.is_hackathon_admin(req.user_id, hackathon_id) {
            return Err(AppError::AlreadyExists(format!(
                "Administrator {}",
                req.user_id
            )));
        }

        let admin = HackathonAdmin {
            id: tables.next_id(),
            user_id: req.user_id,
            hackathon_id,
            role_type: req.role_type,
            remarks: req.remarks,
            create_time: now_utc(),
        };
        tables.admins.insert(admin.id, admin.clone());

        tracing::info!(hackathon_id, user_id = admin.user_id, role_type = admin.role_type, "Administrator added");
        Ok(admin)
    }

    async fn update_admin(
        &self,
        hackathon_id: i64,
        req: UpdateAdminRequest,
    ) -> AppResult<HackathonAdmin> {
        let mut tables = self.store.write().await;
        let creator_id = tables.hackathons.get(&hackathon_id).map(|h| h.creator_id);

        let admin = tables
            .admins
            .get_mut(&req.id)
            .filter(|a| a.hackathon_id == hackathon_id)
            .ok_or_else(|| AppError::NotFound(format!("Administrator {}", req.id)))?;

        if let Some(role_type) = req.role_type {
            if Some(admin.user_id) == creator_id && role_type != admin_role::ADMIN {
                return Err(AppError::Conflict(
                    "The hackathon creator must stay an administrator".to_string(),
                ));
            }
            admin.role_type = role_type;
        }
        if req.remarks.is_some() {
            admin.remarks = req.remarks;
        }

        Ok(admin.clone())
    }

    async fn delete_admin(&self, hackathon_id: i64, id: i64) -> AppResult<()> {
        let mut tables = self.store.write().await;
        let admin = tables
            .admins
            .get(&id)
            .filter(|a| a.hackathon_id == hackathon_id)
            .ok_or_else(|| AppError::NotFound(format!("Administrator {id}")))?;

        let is_creator = tables
            .hackathons
            .get(&hackathon_id)
            .is_some_and(|h| h.creator_id == admin.user_id);
        if is_creator {
            return Err(AppError::Conflict(
                "The hackathon creator cannot be removed".to_string(),
            ));
        }

        tables.admins.remove(&id);
        tracing::info!(hackathon_id, administrator_id = id, "Administrator removed");
        Ok(())
    }
}
