//! HTTP Request Handlers
//!
//! One module per group of resources. Each module registers its paths into
//! the shared [`RouteTable`]; guards are layered onto the individual method
//! handlers with [`guarded!`].

/// Wrap a handler in its guards.
///
/// - `token`: bearer token
/// - `hackathon`: `hackathon_name` header
/// - `participant`: token, then hackathon
/// - `admin`: token, then hackathon, then admin privilege
///
/// The outermost layer runs first, so layers are added innermost first.
macro_rules! guarded {
    ($state:expr, token, $handler:expr) => {{
        use axum::handler::Handler as _;
        $handler.layer(axum::middleware::from_fn_with_state(
            $state.clone(),
            $crate::middleware::token_required,
        ))
    }};
    ($state:expr, hackathon, $handler:expr) => {{
        use axum::handler::Handler as _;
        $handler.layer(axum::middleware::from_fn_with_state(
            $state.clone(),
            $crate::middleware::hackathon_name_required,
        ))
    }};
    ($state:expr, participant, $handler:expr) => {{
        use axum::handler::Handler as _;
        $handler
            .layer(axum::middleware::from_fn_with_state(
                $state.clone(),
                $crate::middleware::hackathon_name_required,
            ))
            .layer(axum::middleware::from_fn_with_state(
                $state.clone(),
                $crate::middleware::token_required,
            ))
    }};
    ($state:expr, admin, $handler:expr) => {{
        use axum::handler::Handler as _;
        $handler
            .layer(axum::middleware::from_fn_with_state(
                $state.clone(),
                $crate::middleware::admin_privilege_required,
            ))
            .layer(axum::middleware::from_fn_with_state(
                $state.clone(),
                $crate::middleware::hackathon_name_required,
            ))
            .layer(axum::middleware::from_fn_with_state(
                $state.clone(),
                $crate::middleware::token_required,
            ))
    }};
}

pub mod admin;
pub mod common;
pub mod hackathons;
pub mod health;
pub mod registrar;
pub mod teams;
pub mod templates;
pub mod users;

use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::{DefaultOnFailure, TraceLayer},
};
use tracing::Level;

use crate::{error::AppError, middleware::logging_middleware, state::AppState};

pub use registrar::{RegistrationError, RouteTable};

/// Bind every path of the API
pub fn routes(state: &AppState) -> Result<RouteTable, RegistrationError> {
    let mut table = RouteTable::new();

    health::register(&mut table)?;
    templates::register(&mut table, state)?;
    hackathons::register(&mut table, state)?;
    users::register(&mut table, state)?;
    teams::register(&mut table, state)?;
    admin::register(&mut table, state)?;

    Ok(table)
}

/// Build the complete application with its ambient layers
pub fn app(state: AppState) -> Result<Router, RegistrationError> {
    let table = routes(&state)?;
    tracing::info!(paths = table.len(), "Routes registered");

    let max_upload_bytes = state.config().storage.max_upload_bytes;

    Ok(table
        .into_router()
        .fallback(unknown_path)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .layer(middleware::from_fn(logging_middleware))
        // Failed responses are logged where they are raised
        .layer(
            TraceLayer::new_for_http()
                .on_failure(DefaultOnFailure::new().level(Level::DEBUG)),
        )
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state))
}

async fn unknown_path() -> AppError {
    AppError::NotFound("route".to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use tempfile::TempDir;
    use tracing::{Event, Subscriber};
    use tracing_subscriber::{
        layer::{Context, SubscriberExt},
        Layer,
    };

    use super::*;
    use crate::{
        config::Config,
        db::Store,
        services::{
            admin_service::MockAdminManager, azure_cert_service::MockAzureCertManager,
            register_service::MockRegisterManager, Managers,
        },
        test_utils::{
            seed_hackathon, seed_template, test_app, test_config, test_managers, TestRequest,
        },
    };

    struct Fixture {
        store: Store,
        config: Config,
        managers: Managers,
        _storage: TempDir,
    }

    async fn fixture() -> Fixture {
        let storage = TempDir::new().unwrap();
        let store = Store::new();
        let config = test_config(storage.path());
        let managers = test_managers(&store, &config);
        seed_hackathon(&store, "alpha", 1).await;

        Fixture {
            store,
            config,
            managers,
            _storage: storage,
        }
    }

    impl Fixture {
        fn app(&self) -> Router {
            test_app(self.managers.clone(), self.config.clone())
        }
    }

    const BINDINGS: &[(&str, &str)] = &[
        ("/", "Health"),
        ("/health", "Health"),
        ("/api/currenttime", "CurrentTime"),
        ("/api/template", "Template"),
        ("/api/template/file", "TemplateFile"),
        ("/api/template/list", "TemplateList"),
        ("/api/hackathon", "Hackathon"),
        ("/api/hackathon/list", "HackathonList"),
        ("/api/hackathon/stat", "HackathonStat"),
        ("/api/hackathon/team/list", "HackathonTeamList"),
        ("/api/hackathon/registration/list", "HackathonRegistrationList"),
        ("/api/hackathon/template", "HackathonTemplate"),
        ("/api/user", "User"),
        ("/api/user/profile", "UserProfile"),
        ("/api/user/guacamoleconfig", "GuacamoleConfig"),
        ("/api/user/registration", "UserRegistration"),
        ("/api/user/registration/list", "UserHackathonList"),
        ("/api/user/experiment", "UserExperiment"),
        ("/api/user/experiment/list", "UserExperimentList"),
        ("/api/user/team/list", "UserTeamList"),
        ("/api/team", "Team"),
        ("/api/team/list", "TeamList"),
        ("/api/team/member", "TeamMember"),
        ("/api/team/member/list", "TeamMemberList"),
        ("/api/team/leader", "TeamLeader"),
        ("/api/team/template", "TeamTemplate"),
        ("/api/admin/hackathon", "AdminHackathon"),
        ("/api/admin/hackathon/checkname", "HackathonCheckName"),
        ("/api/admin/hackathon/list", "AdminHackathonList"),
        ("/api/admin/registration", "AdminRegistration"),
        ("/api/admin/registration/list", "AdminRegistrationList"),
        ("/api/admin/hackathon/template", "AdminHackathonTemplate"),
        ("/api/admin/template/list", "AdminTemplateList"),
        ("/api/admin/template", "AdminTemplate"),
        ("/api/admin/azure", "AzureCertificate"),
        ("/api/admin/file", "AdminFile"),
        ("/api/admin/experiment", "AdminExperiment"),
        ("/api/admin/experiment/list", "AdminExperimentList"),
        ("/api/admin/hackathon/administrator/list", "HackathonAdminList"),
        ("/api/admin/hackathon/administrator", "HackathonAdministrator"),
    ];

    #[tokio::test]
    async fn test_route_table_binds_each_path_once() {
        let f = fixture().await;
        let state = AppState::new(f.managers.clone(), f.config.clone());
        let mut table = routes(&state).unwrap();

        let bound: Vec<_> = table
            .paths()
            .map(|path| (path, table.resource(path).unwrap()))
            .collect();
        let mut expected = BINDINGS.to_vec();
        expected.sort();
        assert_eq!(bound, expected);

        let err = health::register(&mut table).unwrap_err();
        let RegistrationError::DuplicatePath { path, existing } = err;
        assert_eq!(path, "/");
        assert_eq!(existing, "Health");
    }

    #[tokio::test]
    async fn test_unknown_path_and_unsupported_verb() {
        let app = fixture().await.app();

        let (status, body) = TestRequest::new(Method::GET, "/api/nothing").send(&app).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, body) = TestRequest::new(Method::DELETE, "/api/admin/hackathon")
            .user(1)
            .hackathon("alpha")
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"]["code"], "METHOD_NOT_ALLOWED");

        for (path, _) in BINDINGS {
            let (status, body) = TestRequest::new(Method::PATCH, path)
                .user(1)
                .hackathon("alpha")
                .send(&app)
                .await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{path}");
            assert_eq!(body["error"]["code"], "METHOD_NOT_ALLOWED", "{path}");
        }
    }

    #[tokio::test]
    async fn test_current_time() {
        let app = fixture().await.app();

        let (status, body) = TestRequest::new(Method::GET, "/api/currenttime").send(&app).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["currenttime"].as_i64().is_some_and(|ms| ms > 0));
    }

    #[tokio::test]
    async fn test_token_guard() {
        let app = fixture().await.app();

        let (status, _) = TestRequest::new(Method::GET, "/api/user").send(&app).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = TestRequest::new(Method::GET, "/api/user").user(42).send(&app).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 42);
    }

    #[tokio::test]
    async fn test_admin_guard_rejects_before_handler() {
        let mut f = fixture().await;

        let mut admins = MockAdminManager::new();
        admins
            .expect_validate_admin_privilege()
            .times(1)
            .returning(|_, _| Ok(false));
        let mut registrations = MockRegisterManager::new();
        registrations.expect_delete_registration().times(0);
        f.managers.admins = Arc::new(admins);
        f.managers.registrations = Arc::new(registrations);
        let app = f.app();

        let (status, body) = TestRequest::new(Method::DELETE, "/api/admin/registration?id=3")
            .user(7)
            .hackathon("alpha")
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_admin_guard_checks_token_first() {
        let mut f = fixture().await;

        let mut admins = MockAdminManager::new();
        admins.expect_validate_admin_privilege().times(0);
        let mut registrations = MockRegisterManager::new();
        registrations.expect_delete_registration().times(0);
        f.managers.admins = Arc::new(admins);
        f.managers.registrations = Arc::new(registrations);
        let app = f.app();

        let (status, _) = TestRequest::new(Method::DELETE, "/api/admin/registration?id=3")
            .hackathon("alpha")
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = TestRequest::new(Method::DELETE, "/api/admin/registration?id=3")
            .user(1)
            .hackathon("missing")
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = TestRequest::new(Method::DELETE, "/api/admin/registration?id=3")
            .user(1)
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_registration_requires_id() {
        let mut f = fixture().await;

        let mut registrations = MockRegisterManager::new();
        registrations.expect_delete_registration().times(0);
        f.managers.registrations = Arc::new(registrations);
        let app = f.app();

        let (status, body) = TestRequest::new(Method::DELETE, "/api/admin/registration")
            .user(1)
            .hackathon("alpha")
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_get_missing_registration() {
        let app = fixture().await.app();

        let (status, body) = TestRequest::new(Method::GET, "/api/admin/registration?id=999")
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Not found: not found");
    }

    #[tokio::test]
    async fn test_check_name() {
        let app = fixture().await.app();

        let (status, body) = TestRequest::new(Method::GET, "/api/admin/hackathon/checkname?name=alpha")
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(false));

        let (_, body) = TestRequest::new(Method::GET, "/api/admin/hackathon/checkname?name=beta")
            .send(&app)
            .await;
        assert_eq!(body, json!(true));
    }

    #[tokio::test]
    async fn test_create_certificate() {
        let mut f = fixture().await;

        let mut certificates = MockAzureCertManager::new();
        certificates
            .expect_create_certificate()
            .withf(|subscription, host, hackathon| {
                subscription == "sub" && host == "mgmt.test" && hackathon == "alpha"
            })
            .times(1)
            .returning(|_, _, _| Ok("https://certs.test/alpha/sub.cer".to_string()));
        f.managers.certificates = Arc::new(certificates);
        let app = f.app();

        let (status, body) = TestRequest::new(Method::POST, "/api/admin/azure")
            .hackathon("alpha")
            .json(json!({ "management_host": "mgmt.test" }))
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");

        let (status, body) = TestRequest::new(Method::POST, "/api/admin/azure")
            .hackathon("alpha")
            .json(json!({ "subscription_id": "sub", "management_host": "mgmt.test" }))
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["azure_cert_url"], "https://certs.test/alpha/sub.cer");
    }

    #[tokio::test]
    async fn test_create_certificate_failure_names_cause() {
        let mut f = fixture().await;

        let mut certificates = MockAzureCertManager::new();
        certificates
            .expect_create_certificate()
            .returning(|_, _, _| Err(AppError::InvalidInput("bad subscription".to_string())));
        f.managers.certificates = Arc::new(certificates);
        let app = f.app();

        let (status, body) = TestRequest::new(Method::POST, "/api/admin/azure")
            .hackathon("alpha")
            .json(json!({ "subscription_id": "sub", "management_host": "mgmt.test" }))
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"]["message"],
            "fail to create certificate due to [Invalid input: bad subscription]"
        );
    }

    #[tokio::test]
    async fn test_delete_certificate() {
        let mut f = fixture().await;

        let mut certificates = MockAzureCertManager::new();
        certificates
            .expect_delete_certificate()
            .times(1)
            .returning(|_, _| Ok(false));
        f.managers.certificates = Arc::new(certificates);
        let app = f.app();

        let (status, _) = TestRequest::new(Method::DELETE, "/api/admin/azure")
            .hackathon("alpha")
            .json(json!({}))
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = TestRequest::new(Method::DELETE, "/api/admin/azure")
            .hackathon("alpha")
            .json(json!({ "certificate_id": 5 }))
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "fail to delete certificate");
    }

    #[tokio::test]
    async fn test_hackathon_lifecycle_through_router() {
        let f = fixture().await;
        let app = f.app();

        let (status, body) = TestRequest::new(Method::POST, "/api/admin/hackathon")
            .user(9)
            .json(json!({ "name": "beta", "display_name": "Beta" }))
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["creator_id"], 9);

        let (status, _) = TestRequest::new(Method::POST, "/api/admin/hackathon")
            .user(9)
            .json(json!({ "name": "beta", "display_name": "Beta" }))
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::CONFLICT);

        // Creator administers the new hackathon, the seeded creator does not
        let (status, body) = TestRequest::new(Method::PUT, "/api/admin/hackathon")
            .user(9)
            .hackathon("beta")
            .json(json!({ "status": 1 }))
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], 1);

        let (status, _) = TestRequest::new(Method::PUT, "/api/admin/hackathon")
            .user(1)
            .hackathon("beta")
            .json(json!({ "status": 2 }))
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = TestRequest::new(Method::GET, "/api/admin/hackathon/list")
            .user(9)
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(1));

        let tables = f.store.read().await;
        assert!(tables.hackathon_by_name("beta").is_some());
    }

    #[tokio::test]
    async fn test_admin_template_changes_stay_in_hackathon() {
        let f = fixture().await;
        let beta = seed_hackathon(&f.store, "beta", 2).await;
        let template = seed_template(&f.store, "beta-only", Some(beta.id)).await;
        let app = f.app();

        // User 1 administers alpha only
        let uri = format!("/api/admin/hackathon/template?id={}", template.id);
        let (status, _) = TestRequest::new(Method::DELETE, &uri)
            .user(1)
            .hackathon("alpha")
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = TestRequest::new(Method::PUT, "/api/admin/hackathon/template")
            .user(1)
            .hackathon("alpha")
            .json(json!({ "id": template.id, "name": "renamed" }))
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(f.store.read().await.hackathon_template_list(beta.id).len(), 1);

        let (status, _) = TestRequest::new(Method::DELETE, &uri)
            .user(2)
            .hackathon("beta")
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(f.store.read().await.hackathon_template_list(beta.id).is_empty());
    }

    #[tokio::test]
    async fn test_template_changes_require_creator() {
        let f = fixture().await;
        // Seeded templates are created by user 1
        let template = seed_template(&f.store, "ubuntu", None).await;
        let app = f.app();

        let (status, _) = TestRequest::new(Method::PUT, "/api/template")
            .user(7)
            .json(json!({ "id": template.id, "description": "mine now" }))
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let uri = format!("/api/template?id={}", template.id);
        let (status, _) = TestRequest::new(Method::DELETE, &uri).user(7).send(&app).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = TestRequest::new(Method::PUT, "/api/template")
            .user(1)
            .json(json!({ "id": template.id, "description": "updated" }))
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["description"], "updated");

        let (status, _) = TestRequest::new(Method::DELETE, &uri).user(1).send(&app).await;
        assert_eq!(status, StatusCode::OK);
    }

    /// Counts ERROR events seen by the subscriber
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[tokio::test]
    async fn test_certificate_failure_logged_once() {
        let mut f = fixture().await;
        let mut certificates = MockAzureCertManager::new();
        certificates
            .expect_create_certificate()
            .returning(|_, _, _| Err(AppError::InvalidInput("bad subscription".to_string())));
        f.managers.certificates = Arc::new(certificates);
        let app = f.app();

        let errors = Arc::new(AtomicUsize::new(0));
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::registry().with(ErrorCounter(errors.clone())),
        );

        let (status, _) = TestRequest::new(Method::POST, "/api/admin/azure")
            .hackathon("alpha")
            .json(json!({ "subscription_id": "sub", "management_host": "mgmt.test" }))
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_public_registration_list_hides_contact_details() {
        let app = fixture().await.app();

        let (status, _) = TestRequest::new(Method::POST, "/api/admin/registration")
            .user(1)
            .hackathon("alpha")
            .json(json!({
                "user_id": 5,
                "real_name": "Ada",
                "email": "ada@example.com",
                "phone": "555-0100",
            }))
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = TestRequest::new(Method::GET, "/api/hackathon/registration/list")
            .hackathon("alpha")
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::OK);
        let entry = &body[0];
        assert_eq!(entry["user_id"], 5);
        for field in ["email", "phone", "real_name", "remark"] {
            assert!(entry.get(field).is_none(), "{field} exposed");
        }

        let (status, body) = TestRequest::new(Method::GET, "/api/admin/registration/list")
            .user(1)
            .hackathon("alpha")
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn test_file_uploads() {
        let app = fixture().await.app();

        let (status, _) = TestRequest::new(Method::POST, "/api/admin/file")
            .hackathon("alpha")
            .file("logo.png", "image/png", b"png")
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = TestRequest::new(Method::POST, "/api/admin/file")
            .user(1)
            .hackathon("alpha")
            .file("logo.png", "image/png", b"png")
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body[0]["size"], 3);
        let key = body[0]["key"].as_str().unwrap().to_string();

        let (status, _) = TestRequest::new(Method::DELETE, &format!("/api/admin/file?key={key}"))
            .user(1)
            .hackathon("alpha")
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = TestRequest::new(Method::POST, "/api/template/file")
            .user(3)
            .file(
                "vm.json",
                "application/json",
                br#"{"name":"vm","provider":0,"content":{"size":"small"}}"#,
            )
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "vm");
        assert_eq!(body["creator_id"], 3);
    }

    #[tokio::test]
    async fn test_participant_guard() {
        let app = fixture().await.app();

        for (method, path, payload) in [
            (Method::POST, "/api/user/experiment", json!({ "template_name": "ubuntu" })),
            (Method::POST, "/api/team", json!({ "name": "red" })),
        ] {
            let (status, _) = TestRequest::new(method.clone(), path)
                .hackathon("alpha")
                .json(payload.clone())
                .send(&app)
                .await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{path}");

            let (status, _) = TestRequest::new(method.clone(), path)
                .user(5)
                .json(payload.clone())
                .send(&app)
                .await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{path}");

            // Guards pass; user 5 is not registered
            let (status, _) = TestRequest::new(method, path)
                .user(5)
                .hackathon("alpha")
                .json(payload)
                .send(&app)
                .await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{path}");
        }

        let (status, _) = TestRequest::new(Method::GET, "/api/user/experiment/list")
            .send(&app)
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
