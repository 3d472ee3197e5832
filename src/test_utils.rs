//! Shared test fixtures: configuration, seeded store rows and a request
//! helper driving the assembled router.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use serde_json::Value;
use tower::ServiceExt;

use crate::{
    config::{
        AdminConfig, AzureConfig, Config, GuacamoleConfig, JwtConfig, ServerConfig, StorageConfig,
    },
    constants::{
        admin_role, experiment_status, hackathon_status, team_member_status, template_provider,
        HACKATHON_NAME_HEADER,
    },
    db::Store,
    handlers,
    models::{
        Experiment, Hackathon, HackathonAdmin, HackathonBasicInfo, Registration, Team, TeamMember,
        Template,
    },
    services::{AuthService, LocalFileStorage, Managers},
    state::AppState,
    utils::now_utc,
};

pub const TEST_SECRET: &str = "test-secret";

/// Super administrator configured by [`test_config`]
pub const SUPER_ADMIN_ID: i64 = 1000;

pub fn test_config(storage_root: &Path) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            log_json: false,
        },
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiry_hours: 1,
        },
        storage: StorageConfig {
            root_path: storage_root.to_path_buf(),
            public_url: "http://files.test/static".to_string(),
            max_upload_bytes: 1024 * 1024,
        },
        azure: AzureConfig {
            cert_base_url: "https://certs.test".to_string(),
        },
        guacamole: GuacamoleConfig {
            url: "http://gateway.test/guacamole".to_string(),
        },
        admin: AdminConfig {
            super_admin_ids: HashSet::from([SUPER_ADMIN_ID]),
        },
    }
}

/// In-memory managers over `store`, with files written under `storage_root`
pub fn test_managers(store: &Store, config: &Config) -> Managers {
    Managers::in_memory(
        store.clone(),
        Arc::new(LocalFileStorage::new(&config.storage)),
        config,
    )
}

pub fn test_app(managers: Managers, config: Config) -> Router {
    handlers::app(AppState::new(managers, config)).expect("routes register once")
}

/// Bearer token for a user
pub fn token_for(user_id: i64) -> String {
    let config = JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiry_hours: 1,
    };
    AuthService::issue_token(user_id, &format!("user{user_id}"), &config)
        .expect("token issues")
}

/// Request builder for router tests
pub struct TestRequest {
    builder: axum::http::request::Builder,
    /// Content type and raw body
    body: Option<(String, Vec<u8>)>,
}

const MULTIPART_BOUNDARY: &str = "hackathon-test-boundary";

impl TestRequest {
    pub fn new(method: Method, uri: &str) -> Self {
        Self {
            builder: Request::builder().method(method).uri(uri),
            body: None,
        }
    }

    pub fn user(mut self, user_id: i64) -> Self {
        self.builder = self
            .builder
            .header(header::AUTHORIZATION, format!("Bearer {}", token_for(user_id)));
        self
    }

    pub fn hackathon(mut self, name: &str) -> Self {
        self.builder = self.builder.header(HACKATHON_NAME_HEADER, name);
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(("application/json".to_string(), body.to_string().into_bytes()));
        self
    }

    /// Multipart form with a single file part
    pub fn file(mut self, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        let mut body = format!(
            "--{MULTIPART_BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

        self.body = Some((
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
            body,
        ));
        self
    }

    /// Send through the router, returning the status and the JSON body
    /// (`Value::Null` when the body is empty)
    pub async fn send(self, app: &Router) -> (StatusCode, Value) {
        let request = match self.body {
            Some((content_type, body)) => self
                .builder
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body)),
            None => self.builder.body(Body::empty()),
        }
        .expect("valid request");

        let response = app.clone().oneshot(request).await.expect("infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };
        (status, body)
    }
}

/// Online hackathon with an open registration window; `creator_id` is its admin
pub async fn seed_hackathon(store: &Store, name: &str, creator_id: i64) -> Hackathon {
    let mut tables = store.write().await;
    let now = now_utc();

    let hackathon = Hackathon {
        id: tables.next_id(),
        name: name.to_string(),
        display_name: name.to_uppercase(),
        description: None,
        status: hackathon_status::ONLINE,
        creator_id,
        event_start_time: Some(now),
        event_end_time: Some(now + Duration::days(2)),
        registration_start_time: Some(now - Duration::days(1)),
        registration_end_time: Some(now + Duration::days(1)),
        judge_start_time: None,
        judge_end_time: None,
        banners: vec![],
        basic_info: HackathonBasicInfo::default(),
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
    hackathon
}

pub async fn seed_registration(
    store: &Store,
    hackathon_id: i64,
    user_id: i64,
    status: i32,
) -> Registration {
    let mut tables = store.write().await;
    let now = now_utc();

    let registration = Registration {
        id: tables.next_id(),
        user_id,
        hackathon_id,
        real_name: None,
        email: None,
        phone: None,
        status,
        remark: None,
        create_time: now,
        update_time: now,
    };
    tables
        .registrations
        .insert(registration.id, registration.clone());
    registration
}

/// Docker template, offered in `hackathon_id` when given
pub async fn seed_template(store: &Store, name: &str, hackathon_id: Option<i64>) -> Template {
    let mut tables = store.write().await;
    let now = now_utc();

    let template = Template {
        id: tables.next_id(),
        name: name.to_string(),
        provider: template_provider::DOCKER,
        description: None,
        content: serde_json::json!({ "image": "ubuntu:24.04" }),
        creator_id: 1,
        create_time: now,
        update_time: now,
    };
    tables.templates.insert(template.id, template.clone());
    if let Some(hackathon_id) = hackathon_id {
        tables.hackathon_templates.insert((hackathon_id, template.id));
    }
    template
}

/// Team led by `leader_id`, who is its only (approved) member
pub async fn seed_team(store: &Store, hackathon_id: i64, leader_id: i64, name: &str) -> Team {
    let mut tables = store.write().await;
    let now = now_utc();

    let team = Team {
        id: tables.next_id(),
        hackathon_id,
        name: name.to_string(),
        description: None,
        logo: None,
        leader_id,
        template_id: None,
        create_time: now,
        update_time: now,
    };
    let leader = TeamMember {
        id: tables.next_id(),
        team_id: team.id,
        user_id: leader_id,
        status: team_member_status::APPROVED,
        join_time: now,
    };
    tables.team_members.insert(leader.id, leader);
    tables.teams.insert(team.id, team.clone());
    team
}

/// Running experiment of `user_id` on a fresh template offered by the hackathon
pub async fn seed_experiment(store: &Store, hackathon_id: i64, user_id: i64) -> Experiment {
    let template_name = format!("seed-{hackathon_id}-{user_id}");
    let template = seed_template(store, &template_name, Some(hackathon_id)).await;

    let mut tables = store.write().await;
    let now = now_utc();
    let experiment = Experiment {
        id: tables.next_id(),
        user_id: Some(user_id),
        hackathon_id,
        template_id: template.id,
        status: experiment_status::RUNNING,
        last_heart_beat_time: now,
        remote: None,
        create_time: now,
    };
    tables.experiments.insert(experiment.id, experiment.clone());
    experiment
}
