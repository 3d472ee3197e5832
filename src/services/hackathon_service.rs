//! Hackathon manager

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    constants::{admin_role, experiment_status::RUNNING, hackathon_status},
    db::{paginate, Store},
    error::{AppError, AppResult},
    handlers::admin::request::{CreateHackathonRequest, UpdateHackathonRequest},
    models::{Hackathon, HackathonAdmin, HackathonStat, StoredFile, UploadedFile},
    services::storage::FileStorage,
    utils::{now_utc, validate_hackathon_name},
};

/// Hackathon lookup, listing, lifecycle and attachments
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HackathonManager: Send + Sync {
    /// Find a hackathon by its unique name
    async fn get_hackathon_by_name(&self, name: &str) -> AppResult<Option<Hackathon>>;

    /// List hackathons, newest first
    async fn list_hackathons(
        &self,
        name: Option<String>,
        status: Option<i32>,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<Hackathon>, i64)>;

    async fn get_hackathon_stat(&self, hackathon_id: i64) -> AppResult<HackathonStat>;

    /// Create a draft hackathon; its creator becomes its first admin
    async fn create_new_hackathon(
        &self,
        creator_id: i64,
        req: CreateHackathonRequest,
    ) -> AppResult<Hackathon>;

    async fn update_hackathon(
        &self,
        hackathon_id: i64,
        req: UpdateHackathonRequest,
    ) -> AppResult<Hackathon>;

    /// Hackathons the user administers or judges
    async fn get_permitted_hackathon_list_by_admin_user_id(
        &self,
        user_id: i64,
    ) -> AppResult<Vec<Hackathon>>;

    async fn upload_files(&self, files: Vec<UploadedFile>) -> AppResult<Vec<StoredFile>>;

    /// Delete an uploaded file; returns false if the key is unknown
    async fn delete_file(&self, key: &str) -> AppResult<bool>;
}

/// In-memory hackathon manager
pub struct HackathonService {
    store: Store,
    storage: Arc<dyn FileStorage>,
    super_admins: HashSet<i64>,
}

impl HackathonService {
    pub fn new(store: Store, storage: Arc<dyn FileStorage>, super_admins: HashSet<i64>) -> Self {
        Self {
            store,
            storage,
            super_admins,
        }
    }
}

#[async_trait]
impl HackathonManager for HackathonService {
    async fn get_hackathon_by_name(&self, name: &str) -> AppResult<Option<Hackathon>> {
        Ok(self.store.read().await.hackathon_by_name(name).cloned())
    }

    async fn list_hackathons(
        &self,
        name: Option<String>,
        status: Option<i32>,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<Hackathon>, i64)> {
        let tables = self.store.read().await;
        let needle = name.map(|n| n.to_lowercase());

        let hackathons: Vec<Hackathon> = tables
            .hackathons
            .values()
            .rev()
            .filter(|h| status.is_none_or(|s| h.status == s))
            .filter(|h| {
                needle.as_deref().is_none_or(|n| {
                    h.name.contains(n) || h.display_name.to_lowercase().contains(n)
                })
            })
            .cloned()
            .collect();

        Ok(paginate(hackathons, page, per_page))
    }

    async fn get_hackathon_stat(&self, hackathon_id: i64) -> AppResult<HackathonStat> {
        let tables = self.store.read().await;
        if !tables.hackathons.contains_key(&hackathon_id) {
            return Err(AppError::NotFound("Hackathon".to_string()));
        }

        let registrations = tables
            .registrations
            .values()
            .filter(|r| r.hackathon_id == hackathon_id);

        Ok(HackathonStat {
            hackathon_id,
            register: registrations.clone().count() as i64,
            audited: registrations.filter(|r| r.is_approved()).count() as i64,
            teams: tables
                .teams
                .values()
                .filter(|t| t.hackathon_id == hackathon_id)
                .count() as i64,
            online: tables
                .experiments
                .values()
                .filter(|e| e.hackathon_id == hackathon_id && e.status == RUNNING)
                .count() as i64,
        })
    }

    async fn create_new_hackathon(
        &self,
        creator_id: i64,
        req: CreateHackathonRequest,
    ) -> AppResult<Hackathon> {
        validate_hackathon_name(&req.name).map_err(|e| AppError::Validation(e.to_string()))?;

        let mut tables = self.store.write().await;
        if tables.hackathon_by_name(&req.name).is_some() {
            return Err(AppError::AlreadyExists(format!("Hackathon {}", req.name)));
        }

        let now = now_utc();
        let hackathon = Hackathon {
            id: tables.next_id(),
            name: req.name,
            display_name: req.display_name,
            description: req.description,
            status: hackathon_status::DRAFT,
            creator_id,
            event_start_time: req.event_start_time,
            event_end_time: req.event_end_time,
            registration_start_time: req.registration_start_time,
            registration_end_time: req.registration_end_time,
            judge_start_time: req.judge_start_time,
            judge_end_time: req.judge_end_time,
            banners: req.banners,
            basic_info: req.basic_info,
            create_time: now,
            update_time: now,
        };

        let admin = HackathonAdmin {
            id: tables.next_id(),
            user_id: creator_id,
            hackathon_id: hackathon.id,
            role_type: admin_role::ADMIN,
            remarks: Some("creator".to_string()),
            create_time: now,
        };
        tables.admins.insert(admin.id, admin);
        tables.hackathons.insert(hackathon.id, hackathon.clone());

        tracing::info!(hackathon_id = hackathon.id, name = %hackathon.name, creator_id, "Hackathon created");
        Ok(hackathon)
    }

    async fn update_hackathon(
        &self,
        hackathon_id: i64,
        req: UpdateHackathonRequest,
    ) -> AppResult<Hackathon> {
        let mut tables = self.store.write().await;
        let hackathon = tables
            .hackathons
            .get_mut(&hackathon_id)
            .ok_or_else(|| AppError::NotFound("Hackathon".to_string()))?;

        if let Some(display_name) = req.display_name {
            hackathon.display_name = display_name;
        }
        if req.description.is_some() {
            hackathon.description = req.description;
        }
        if let Some(status) = req.status {
            hackathon.status = status;
        }
        if req.event_start_time.is_some() {
            hackathon.event_start_time = req.event_start_time;
        }
        if req.event_end_time.is_some() {
            hackathon.event_end_time = req.event_end_time;
        }
        if req.registration_start_time.is_some() {
            hackathon.registration_start_time = req.registration_start_time;
        }
        if req.registration_end_time.is_some() {
            hackathon.registration_end_time = req.registration_end_time;
        }
        if req.judge_start_time.is_some() {
            hackathon.judge_start_time = req.judge_start_time;
        }
        if req.judge_end_time.is_some() {
            hackathon.judge_end_time = req.judge_end_time;
        }
        if let Some(banners) = req.banners {
            hackathon.banners = banners;
        }
        if let Some(basic_info) = req.basic_info {
            hackathon.basic_info = basic_info;
        }
        hackathon.update_time = now_utc();

        tracing::info!(hackathon_id, "Hackathon updated");
        Ok(hackathon.clone())
    }

    async fn get_permitted_hackathon_list_by_admin_user_id(
        &self,
        user_id: i64,
    ) -> AppResult<Vec<Hackathon>> {
        let tables = self.store.read().await;
        let all = self.super_admins.contains(&user_id);

        Ok(tables
            .hackathons
            .values()
            .rev()
            .filter(|h| all || tables.is_hackathon_admin(user_id, h.id))
            .cloned()
            .collect())
    }

    async fn upload_files(&self, files: Vec<UploadedFile>) -> AppResult<Vec<StoredFile>> {
        if files.is_empty() {
            return Err(AppError::InvalidInput("No file uploaded".to_string()));
        }

        let mut stored = Vec::with_capacity(files.len());
        for file in files {
            stored.push(self.storage.save(file).await?);
        }
        Ok(stored)
    }

    async fn delete_file(&self, key: &str) -> AppResult<bool> {
        self.storage.delete(key).await
    }
}
