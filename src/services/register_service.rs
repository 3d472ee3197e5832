//! Registration manager

use async_trait::async_trait;

use crate::{
    constants::registration_status,
    db::Store,
    error::{AppError, AppResult},
    handlers::{
        admin::request::{CreateRegistrationRequest, UpdateRegistrationRequest},
        users::{request::UserRegistrationRequest, response::UserHackathonResponse},
    },
    models::{Hackathon, Registration},
    utils::now_utc,
};

/// Registrations of users to hackathons
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegisterManager: Send + Sync {
    async fn get_all_registration_by_hackathon_id(
        &self,
        hackathon_id: i64,
    ) -> AppResult<Vec<Registration>>;

    async fn get_registration_by_id(&self, id: i64) -> AppResult<Option<Registration>>;

    /// Register a user on their behalf, bypassing the registration window
    async fn create_registration(
        &self,
        hackathon_id: i64,
        req: CreateRegistrationRequest,
    ) -> AppResult<Registration>;

    async fn update_registration(
        &self,
        hackathon_id: i64,
        req: UpdateRegistrationRequest,
    ) -> AppResult<Registration>;

    async fn delete_registration(&self, hackathon_id: i64, id: i64) -> AppResult<()>;

    async fn get_user_registration(
        &self,
        user_id: i64,
        hackathon_id: i64,
    ) -> AppResult<Option<Registration>>;

    /// Self-registration of the current user
    async fn register(
        &self,
        user_id: i64,
        hackathon: &Hackathon,
        req: UserRegistrationRequest,
    ) -> AppResult<Registration>;

    /// Hackathons the user registered for
    async fn get_user_hackathon_list(&self, user_id: i64)
    -> AppResult<Vec<UserHackathonResponse>>;
}

/// In-memory registration manager
pub struct RegisterService {
    store: Store,
}

impl RegisterService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RegisterManager for RegisterService {
    async fn get_all_registration_by_hackathon_id(
        &self,
        hackathon_id: i64,
    ) -> AppResult<Vec<Registration>> {
        Ok(self
            .store
            .read()
            .await
            .registrations
            .values()
            .filter(|r| r.hackathon_id == hackathon_id)
            .cloned()
            .collect())
    }

    async fn get_registration_by_id(&self, id: i64) -> AppResult<Option<Registration>> {
        Ok(self.store.read().await.registrations.get(&id).cloned())
    }

    async fn create_registration(
        &self,
        hackathon_id: i64,
        req: CreateRegistrationRequest,
    ) -> AppResult<Registration> {
        let mut tables = self.store.write().await;
        if tables
            .registrations
            .values()
            .any(|r| r.hackathon_id == hackathon_id && r.user_id == req.user_id)
        {
            return Err(AppError::AlreadyExists(format!(
                "Registration of user {}",
                req.user_id
            )));
        }

        let now = now_utc();
        let registration = Registration {
            id: tables.next_id(),
            user_id: req.user_id,
            hackathon_id,
            real_name: req.real_name,
            email: req.email,
            phone: req.phone,
            status: req.status.unwrap_or(registration_status::AUDIT_PASSED),
            remark: req.remark,
            create_time: now,
            update_time: now,
        };
        tables
            .registrations
            .insert(registration.id, registration.clone());

        tracing::info!(
            registration_id = registration.id,
            hackathon_id,
            user_id = registration.user_id,
            "Registration created by admin"
        );
        Ok(registration)
    }

    async fn update_registration(
        &self,
        hackathon_id: i64,
        req: UpdateRegistrationRequest,
    ) -> AppResult<Registration> {
        let mut tables = self.store.write().await;
        let registration = tables
            .registrations
            .get_mut(&req.id)
            .filter(|r| r.hackathon_id == hackathon_id)
            .ok_or_else(|| AppError::NotFound(format!("Registration {}", req.id)))?;

        if let Some(status) = req.status {
            registration.status = status;
        }
        if req.real_name.is_some() {
            registration.real_name = req.real_name;
        }
        if req.email.is_some() {
            registration.email = req.email;
        }
        if req.phone.is_some() {
            registration.phone = req.phone;
        }
        if req.remark.is_some() {
            registration.remark = req.remark;
        }
        registration.update_time = now_utc();

        Ok(registration.clone())
    }

    async fn delete_registration(&self, hackathon_id: i64, id: i64) -> AppResult<()> {
        let mut tables = self.store.write().await;
        match tables.registrations.get(&id) {
            Some(r) if r.hackathon_id == hackathon_id => {
                tables.registrations.remove(&id);
                tracing::info!(registration_id = id, hackathon_id, "Registration deleted");
                Ok(())
            }
            _ => Err(AppError::NotFound(format!("Registration {id}"))),
        }
    }

    async fn get_user_registration(
        &self,
        user_id: i64,
        hackathon_id: i64,
    ) -> AppResult<Option<Registration>> {
        Ok(self
            .store
            .read()
            .await
            .registrations
            .values()
            .find(|r| r.user_id == user_id && r.hackathon_id == hackathon_id)
            .cloned())
    }

    async fn register(
        &self,
        user_id: i64,
        hackathon: &Hackathon,
        req: UserRegistrationRequest,
    ) -> AppResult<Registration> {
        if !hackathon.is_registration_open_at(now_utc()) {
            return Err(AppError::Forbidden(
                "Registration is not open for this hackathon".to_string(),
            ));
        }

        let mut tables = self.store.write().await;
        let existing = tables
            .registrations
            .values()
            .filter(|r| r.hackathon_id == hackathon.id);
        if existing.clone().any(|r| r.user_id == user_id) {
            return Err(AppError::AlreadyExists("Registration".to_string()));
        }

        let max = hackathon.basic_info.max_enrollment;
        if max > 0 && existing.filter(|r| r.is_approved()).count() >= max as usize {
            return Err(AppError::Conflict(
                "Hackathon has reached its maximum enrollment".to_string(),
            ));
        }

        let profile = tables.profiles.get(&user_id);
        let real_name = req
            .real_name
            .or_else(|| profile.and_then(|p| p.real_name.clone()));
        let phone = req.phone.or_else(|| profile.and_then(|p| p.phone.clone()));

        let now = now_utc();
        let registration = Registration {
            id: tables.next_id(),
            user_id,
            hackathon_id: hackathon.id,
            real_name,
            email: req.email,
            phone,
            status: if hackathon.basic_info.auto_approve {
                registration_status::AUTO_PASSED
            } else {
                registration_status::UNAUDITED
            },
            remark: req.remark,
            create_time: now,
            update_time: now,
        };
        tables
            .registrations
            .insert(registration.id, registration.clone());

        tracing::info!(
            registration_id = registration.id,
            hackathon_id = hackathon.id,
            user_id,
            status = registration.status,
            "User registered"
        );
        Ok(registration)
    }

    async fn get_user_hackathon_list(
        &self,
        user_id: i64,
    ) -> AppResult<Vec<UserHackathonResponse>> {
        let tables = self.store.read().await;
        Ok(tables
            .registrations
            .values()
            .filter(|r| r.user_id == user_id)
            .filter_map(|r| {
                tables
                    .hackathons
                    .get(&r.hackathon_id)
                    .map(|h| UserHackathonResponse {
                        hackathon: h.clone(),
                        registration: r.clone(),
                    })
            })
            .collect())
    }
}
