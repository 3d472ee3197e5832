//! User manager

use async_trait::async_trait;

use crate::{
    db::Store,
    error::AppResult,
    handlers::users::request::UpdateProfileRequest,
    middleware::AuthenticatedUser,
    models::{User, UserProfile},
    utils::now_utc,
};

/// Current user info and profile
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserManager: Send + Sync {
    /// Look up the authenticated user, creating the record on first sight
    async fn get_user_info(&self, user: &AuthenticatedUser) -> AppResult<User>;

    async fn get_profile(&self, user_id: i64) -> AppResult<Option<UserProfile>>;

    async fn update_profile(&self, user_id: i64, req: UpdateProfileRequest)
    -> AppResult<UserProfile>;
}

/// In-memory user manager
pub struct UserService {
    store: Store,
}

impl UserService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserManager for UserService {
    async fn get_user_info(&self, user: &AuthenticatedUser) -> AppResult<User> {
        let mut tables = self.store.write().await;
        let now = now_utc();

        let record = tables.users.entry(user.id).or_insert_with(|| {
            tracing::info!(user_id = user.id, name = %user.name, "First login, user created");
            User {
                id: user.id,
                name: user.name.clone(),
                nickname: None,
                email: None,
                avatar_url: None,
                create_time: now,
                last_login_time: now,
            }
        });
        record.last_login_time = now;

        Ok(record.clone())
    }

    async fn get_profile(&self, user_id: i64) -> AppResult<Option<UserProfile>> {
        Ok(self.store.read().await.profiles.get(&user_id).cloned())
    }

    async fn update_profile(
        &self,
        user_id: i64,
        req: UpdateProfileRequest,
    ) -> AppResult<UserProfile> {
        let mut tables = self.store.write().await;
        let profile = tables.profiles.entry(user_id).or_insert_with(|| UserProfile {
            user_id,
            ..Default::default()
        });

        if req.real_name.is_some() {
            profile.real_name = req.real_name;
        }
        if req.phone.is_some() {
            profile.phone = req.phone;
        }
        if req.address.is_some() {
            profile.address = req.address;
        }
        if req.career.is_some() {
            profile.career = req.career;
        }
        if req.description.is_some() {
            profile.description = req.description;
        }
        profile.update_time = Some(now_utc());

        Ok(profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_user_info_creates_once() {
        let service = UserService::new(Store::new());
        let user = AuthenticatedUser {
            id: 12,
            name: "ada".to_string(),
        };

        let first = service.get_user_info(&user).await.unwrap();
        let second = service.get_user_info(&user).await.unwrap();

        assert_eq!(first.id, 12);
        assert_eq!(first.create_time, second.create_time);
        assert!(second.last_login_time >= first.last_login_time);
        assert_eq!(second.display_name(), "ada");
    }

    #[tokio::test]
    async fn test_profile_merge() {
        let service = UserService::new(Store::new());
        assert!(service.get_profile(12).await.unwrap().is_none());

        let req = UpdateProfileRequest {
            real_name: Some("Ada Lovelace".to_string()),
            phone: None,
            address: None,
            career: Some("engineer".to_string()),
            description: None,
        };
        service.update_profile(12, req).await.unwrap();

        let req = UpdateProfileRequest {
            real_name: None,
            phone: Some("555-0100".to_string()),
            address: None,
            career: None,
            description: None,
        };
        let profile = service.update_profile(12, req).await.unwrap();

        assert_eq!(profile.real_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(profile.phone.as_deref(), Some("555-0100"));
        assert!(profile.update_time.is_some());
    }
}
