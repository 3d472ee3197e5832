//! Experiment manager
//!
//! Experiments are simulated: starting one records it as running and hands
//! out a VNC connection through the remote desktop gateway. Each user has at
//! most one live experiment per hackathon.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{
    config::GuacamoleConfig as GatewayConfig,
    constants::{experiment_status, GUACAMOLE_VNC_PORT},
    db::{Store, Tables},
    error::{AppError, AppResult},
    handlers::admin::request::AdminStartExperimentRequest,
    models::{Experiment, GuacamoleConfig, Template},
    utils::{now_utc, remote_password},
};

/// Participant experiments and their remote desktop configuration
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperimentManager: Send + Sync {
    /// Start an experiment, or return the user's live one
    async fn start_experiment(
        &self,
        user_id: i64,
        hackathon_id: i64,
        template_name: &str,
    ) -> AppResult<Experiment>;

    async fn get_experiment(&self, user_id: i64, id: i64) -> AppResult<Option<Experiment>>;

    /// Record that the experiment is still in use
    async fn heart_beat(&self, user_id: i64, id: i64) -> AppResult<Experiment>;

    async fn stop_experiment(&self, user_id: i64, id: i64) -> AppResult<Experiment>;

    async fn list_user_experiments(&self, user_id: i64) -> AppResult<Vec<Experiment>>;

    /// Remote desktop connection of the user's live experiment
    async fn get_guacamole_config(
        &self,
        user_id: i64,
        hackathon_id: i64,
    ) -> AppResult<GuacamoleConfig>;

    async fn admin_start_experiment(
        &self,
        hackathon_id: i64,
        req: AdminStartExperimentRequest,
    ) -> AppResult<Experiment>;

    async fn admin_stop_experiment(&self, hackathon_id: i64, id: i64) -> AppResult<Experiment>;

    async fn list_hackathon_experiments(
        &self,
        hackathon_id: i64,
        status: Option<i32>,
    ) -> AppResult<Vec<Experiment>>;
}

/// In-memory experiment manager
pub struct ExperimentService {
    store: Store,
    gateway_url: String,
}

impl ExperimentService {
    pub fn new(store: Store, config: &GatewayConfig) -> Self {
        Self {
            store,
            gateway_url: config.url.trim_end_matches('/').to_string(),
        }
    }

    /// Connection settings for a new experiment
    fn remote_for(&self, experiment_id: i64, template: &Template) -> GuacamoleConfig {
        let name = format!("experiment-{experiment_id}");
        // Gateway client ids are base64("<connection>\0c\0<auth provider>")
        let client_id = STANDARD.encode(format!("{name}\0c\0default"));
        let hostname = template
            .content
            .get("hostname")
            .and_then(|h| h.as_str())
            .unwrap_or("localhost")
            .to_string();

        GuacamoleConfig {
            url: format!("{}/#/client/{client_id}", self.gateway_url),
            name,
            protocol: "vnc".to_string(),
            hostname,
            port: GUACAMOLE_VNC_PORT,
            password: remote_password(),
        }
    }

    fn launch(
        &self,
        tables: &mut Tables,
        user_id: Option<i64>,
        hackathon_id: i64,
        template_name: &str,
    ) -> AppResult<Experiment> {
        if let Some(user_id) = user_id {
            if let Some(live) = tables
                .experiments
                .values()
                .find(|e| e.user_id == Some(user_id) && e.hackathon_id == hackathon_id && e.is_alive())
            {
                return Ok(live.clone());
            }
        }

        let template = tables
            .hackathon_template_list(hackathon_id)
            .into_iter()
            .find(|t| t.name == template_name)
            .ok_or_else(|| AppError::NotFound(format!("Template {template_name} in hackathon")))?;

        let now = now_utc();
        let id = tables.next_id();
        let experiment = Experiment {
            id,
            user_id,
            hackathon_id,
            template_id: template.id,
            status: experiment_status::RUNNING,
            last_heart_beat_time: now,
            remote: Some(self.remote_for(id, &template)),
            create_time: now,
        };
        tables.experiments.insert(id, experiment.clone());

        tracing::info!(experiment_id = id, hackathon_id, ?user_id, template = %template.name, "Experiment started");
        Ok(experiment)
    }
}

/// Live experiment owned by the user, or 404
fn owned_experiment(tables: &mut Tables, user_id: i64, id: i64) -> AppResult<&mut Experiment> {
    tables
        .experiments
        .get_mut(&id)
        .filter(|e| e.user_id == Some(user_id))
        .ok_or_else(|| AppError::NotFound(format!("Experiment {id}")))
}

fn stop(experiment: &mut Experiment) -> Experiment {
    if experiment.is_alive() {
        experiment.status = experiment_status::STOPPED;
        tracing::info!(experiment_id = experiment.id, "Experiment stopped");
    }
    experiment.clone()
}

#[async_trait]
impl ExperimentManager for ExperimentService {
    async fn start_experiment(
        &self,
        user_id: i64,
        hackathon_id: i64,
        template_name: &str,
    ) -> AppResult<Experiment> {
        let mut tables = self.store.write().await;
        let approved = tables
            .registrations
            .values()
            .any(|r| r.user_id == user_id && r.hackathon_id == hackathon_id && r.is_approved());
        if !approved {
            return Err(AppError::Forbidden(
                "An approved registration is required".to_string(),
            ));
        }

        self.launch(&mut tables, Some(user_id), hackathon_id, template_name)
    }

    async fn get_experiment(&self, user_id: i64, id: i64) -> AppResult<Option<Experiment>> {
        Ok(self
            .store
            .read()
            .await
            .experiments
            .get(&id)
            .filter(|e| e.user_id == Some(user_id))
            .cloned())
    }

    async fn heart_beat(&self, user_id: i64, id: i64) -> AppResult<Experiment> {
        let mut tables = self.store.write().await;
        let experiment = owned_experiment(&mut tables, user_id, id)?;
        if !experiment.is_alive() {
            return Err(AppError::Conflict(format!("Experiment {id} is not running")));
        }

        experiment.last_heart_beat_time = now_utc();
        Ok(experiment.clone())
    }

    async fn stop_experiment(&self, user_id: i64, id: i64) -> AppResult<Experiment> {
        let mut tables = self.store.write().await;
        Ok(stop(owned_experiment(&mut tables, user_id, id)?))
    }

    async fn list_user_experiments(&self, user_id: i64) -> AppResult<Vec<Experiment>> {
        Ok(self
            .store
            .read()
            .await
            .experiments
            .values()
            .filter(|e| e.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    async fn get_guacamole_config(
        &self,
        user_id: i64,
        hackathon_id: i64,
    ) -> AppResult<GuacamoleConfig> {
        self.store
            .read()
            .await
            .experiments
            .values()
            .find(|e| e.user_id == Some(user_id) && e.hackathon_id == hackathon_id && e.is_alive())
            .and_then(|e| e.remote.clone())
            .ok_or_else(|| AppError::NotFound("No running experiment".to_string()))
    }

    async fn admin_start_experiment(
        &self,
        hackathon_id: i64,
        req: AdminStartExperimentRequest,
    ) -> AppResult<Experiment> {
        let mut tables = self.store.write().await;
        self.launch(&mut tables, req.user_id, hackathon_id, &req.template_name)
    }

    async fn admin_stop_experiment(&self, hackathon_id: i64, id: i64) -> AppResult<Experiment> {
        let mut tables = self.store.write().await;
        let experiment = tables
            .experiments
            .get_mut(&id)
            .filter(|e| e.hackathon_id == hackathon_id)
            .ok_or_else(|| AppError::NotFound(format!("Experiment {id}")))?;

        Ok(stop(experiment))
    }

    async fn list_hackathon_experiments(
        &self,
        hackathon_id: i64,
        status: Option<i32>,
    ) -> AppResult<Vec<Experiment>> {
        Ok(self
            .store
            .read()
            .await
            .experiments
            .values()
            .filter(|e| e.hackathon_id == hackathon_id)
            .filter(|e| status.is_none_or(|s| e.status == s))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::{registration_status::AUDIT_PASSED, REMOTE_PASSWORD_LENGTH},
        test_utils::{seed_hackathon, seed_registration, seed_template},
    };

    fn service(store: &Store) -> ExperimentService {
        ExperimentService::new(
            store.clone(),
            &GatewayConfig {
                url: "http://gateway.test/guacamole/".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_one_live_experiment_per_user() {
        let store = Store::new();
        let hackathon = seed_hackathon(&store, "alpha", 1).await;
        seed_template(&store, "ubuntu", Some(hackathon.id)).await;
        seed_registration(&store, hackathon.id, 5, AUDIT_PASSED).await;
        let service = service(&store);

        let first = service
            .start_experiment(5, hackathon.id, "ubuntu")
            .await
            .unwrap();
        let second = service
            .start_experiment(5, hackathon.id, "ubuntu")
            .await
            .unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(service.list_user_experiments(5).await.unwrap().len(), 1);

        service.stop_experiment(5, first.id).await.unwrap();
        let third = service
            .start_experiment(5, hackathon.id, "ubuntu")
            .await
            .unwrap();
        assert_ne!(first.id, third.id);
    }

    #[tokio::test]
    async fn test_start_requires_registration_and_template() {
        let store = Store::new();
        let hackathon = seed_hackathon(&store, "alpha", 1).await;
        let service = service(&store);

        let err = service
            .start_experiment(5, hackathon.id, "ubuntu")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        seed_registration(&store, hackathon.id, 5, AUDIT_PASSED).await;
        let err = service
            .start_experiment(5, hackathon.id, "ubuntu")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_guacamole_config() {
        let store = Store::new();
        let hackathon = seed_hackathon(&store, "alpha", 1).await;
        seed_template(&store, "ubuntu", Some(hackathon.id)).await;
        seed_registration(&store, hackathon.id, 5, AUDIT_PASSED).await;
        let service = service(&store);

        let err = service
            .get_guacamole_config(5, hackathon.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let experiment = service
            .start_experiment(5, hackathon.id, "ubuntu")
            .await
            .unwrap();
        let remote = service.get_guacamole_config(5, hackathon.id).await.unwrap();

        let expected_id = STANDARD.encode(format!("experiment-{}\0c\0default", experiment.id));
        assert_eq!(
            remote.url,
            format!("http://gateway.test/guacamole/#/client/{expected_id}")
        );
        assert_eq!(remote.port, GUACAMOLE_VNC_PORT);
        assert_eq!(remote.password.len(), REMOTE_PASSWORD_LENGTH);
    }

    #[tokio::test]
    async fn test_heart_beat_and_ownership() {
        let store = Store::new();
        let hackathon = seed_hackathon(&store, "alpha", 1).await;
        seed_template(&store, "ubuntu", Some(hackathon.id)).await;
        seed_registration(&store, hackathon.id, 5, AUDIT_PASSED).await;
        let service = service(&store);
        let experiment = service
            .start_experiment(5, hackathon.id, "ubuntu")
            .await
            .unwrap();

        let err = service.heart_beat(6, experiment.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(service.get_experiment(6, experiment.id).await.unwrap().is_none());

        let beat = service.heart_beat(5, experiment.id).await.unwrap();
        assert!(beat.last_heart_beat_time >= experiment.last_heart_beat_time);

        service.stop_experiment(5, experiment.id).await.unwrap();
        let err = service.heart_beat(5, experiment.id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_admin_experiments() {
        let store = Store::new();
        let hackathon = seed_hackathon(&store, "alpha", 1).await;
        seed_template(&store, "ubuntu", Some(hackathon.id)).await;
        let service = service(&store);

        let experiment = service
            .admin_start_experiment(
                hackathon.id,
                AdminStartExperimentRequest {
                    template_name: "ubuntu".to_string(),
                    user_id: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(experiment.user_id, None);

        let running = service
            .list_hackathon_experiments(hackathon.id, Some(experiment_status::RUNNING))
            .await
            .unwrap();
        assert_eq!(running.len(), 1);

        let stopped = service
            .admin_stop_experiment(hackathon.id, experiment.id)
            .await
            .unwrap();
        assert_eq!(stopped.status, experiment_status::STOPPED);
        assert!(service
            .list_hackathon_experiments(hackathon.id, Some(experiment_status::RUNNING))
            .await
            .unwrap()
            .is_empty());
    }
}
