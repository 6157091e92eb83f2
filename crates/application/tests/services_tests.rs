use std::sync::Arc;

use easytv_application::{
    AccountService, AdminDashboardService, DashboardService, LoginService, PasswordChange,
    SessionContext,
};
use easytv_domain::api::{endpoints, Method, ServiceError};
use easytv_domain::codes::{ClientError, ErrorCode, ServerCode};
use easytv_domain::entities::{Language, ParamType};
use easytv_domain::job_draft::JobDraft;
use easytv_domain::routes::Route;
use easytv_testing_utils::{
    admin_store, empty_store, error_body, ok_body, user_store, JobBuilder, MockGateway,
    ServiceBuilder, ServiceTaskBuilder, TEST_TOKEN,
};
use serde_json::json;

fn context(store: Arc<dyn easytv_domain::ports::SessionStore>) -> SessionContext {
    SessionContext::restore(store).unwrap()
}

#[tokio::test]
async fn test_login_admin_routes_to_services() {
    let gateway = MockGateway::new();
    gateway.on(
        Method::Post,
        endpoints::LOGIN,
        ok_body(json!({"session_token": "s-1", "is_admin": true})),
    );
    let session = context(empty_store());
    let service = LoginService::new(Arc::new(gateway.clone()), session.clone());

    let outcome = service.login("root", "pw").await.unwrap();
    assert_eq!(outcome.route.to_string(), "admin.html#!/get_services");
    assert!(outcome.session.is_admin);
    assert_eq!(session.token().as_deref(), Some("s-1"));

    let request = gateway.last_request().unwrap();
    assert_eq!(request.body.unwrap(), json!({"username": "root", "password": "pw"}));
    assert!(request.token.is_none());
}

#[tokio::test]
async fn test_login_user_routes_to_all_jobs() {
    let gateway = MockGateway::new();
    gateway.on(Method::Post, endpoints::LOGIN, ok_body(json!({"session_token": "s-2"})));
    let session = context(empty_store());
    let service = LoginService::new(Arc::new(gateway), session.clone());

    let outcome = service.login("owner", "pw").await.unwrap();
    assert_eq!(outcome.route, Route::dashboard());
    assert!(!session.is_admin());
}

#[tokio::test]
async fn test_login_with_empty_fields_makes_no_request() {
    let gateway = MockGateway::new();
    let service = LoginService::new(Arc::new(gateway.clone()), context(empty_store()));

    let error = service.login("", "pw").await.unwrap_err();
    assert_eq!(error, ServiceError::Client(ClientError::MissingFields));
    assert_eq!(gateway.request_count(), 0);
}

#[tokio::test]
async fn test_login_failure_keeps_anonymous() {
    let gateway = MockGateway::new();
    gateway.on(
        Method::Post,
        endpoints::LOGIN,
        error_body(-401, "Username or password are not correct"),
    );
    let session = context(empty_store());
    let service = LoginService::new(Arc::new(gateway), session.clone());

    let error = service.login("owner", "bad").await.unwrap_err();
    assert_eq!(error.code(), ErrorCode::Server(ServerCode::NoSession));
    assert_eq!(error.description(), Some("Username or password are not correct"));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_session_even_on_server_error() {
    let gateway = MockGateway::new();
    gateway.on(Method::Delete, endpoints::LOGOUT, error_body(-500, "boom"));
    let store = user_store();
    store.set_language(Language::El).unwrap();
    let session = context(store.clone());
    let service = AccountService::new(Arc::new(gateway.clone()), session.clone());

    let route = service.logout().await;
    assert_eq!(route, Route::login());
    assert!(!session.is_authenticated());
    assert!(store.load().unwrap().is_none());
    assert_eq!(store.language().unwrap(), Some(Language::El));
    assert_eq!(
        gateway.last_request().unwrap().token.as_deref(),
        Some(TEST_TOKEN)
    );
}

#[tokio::test]
async fn test_change_password_validation() {
    let gateway = MockGateway::new();
    let service = AccountService::new(Arc::new(gateway.clone()), context(user_store()));

    let missing = service
        .change_password(&PasswordChange::new("old", "", "new"))
        .await
        .unwrap_err();
    assert_eq!(missing, ServiceError::Client(ClientError::MissingFields));

    let mismatch = service
        .change_password(&PasswordChange::new("old", "new-1", "new-2"))
        .await
        .unwrap_err();
    assert_eq!(mismatch, ServiceError::Client(ClientError::PasswordMismatch));
    assert_eq!(gateway.request_count(), 0);
}

#[tokio::test]
async fn test_change_password_posts_all_fields() {
    let gateway = MockGateway::new();
    gateway.on(Method::Post, endpoints::CHANGE_PASSWORD, ok_body(json!({})));
    let service = AccountService::new(Arc::new(gateway.clone()), context(user_store()));

    service
        .change_password(&PasswordChange::new("old", "new", "new"))
        .await
        .unwrap();
    let body = gateway.last_request().unwrap().body.unwrap();
    assert_eq!(body["new_password_verification"], json!("new"));
}

#[tokio::test]
async fn test_dashboard_lists_jobs_and_services() {
    let gateway = MockGateway::new();
    gateway.on(
        Method::Get,
        endpoints::JOBS,
        ok_body(json!({"jobs": [JobBuilder::new().with_id(4).build_json()], "next": null})),
    );
    gateway.on(
        Method::Get,
        endpoints::service(2),
        ok_body(json!({"service": ServiceBuilder::new()
            .with_id(2)
            .with_task(ServiceTaskBuilder::new().with_id(8).build())
            .build_json()})),
    );
    let service = DashboardService::new(Arc::new(gateway.clone()), context(user_store()));

    let page = service.get_jobs().await.unwrap();
    assert_eq!(page.jobs[0].id, 4);
    assert!(page.next.is_none());

    let detail = service.get_service(2).await.unwrap();
    assert_eq!(detail.tasks[0].id, 8);
    assert!(gateway
        .requests()
        .iter()
        .all(|r| r.token.as_deref() == Some(TEST_TOKEN)));
}

#[tokio::test]
async fn test_create_job_requires_complete_draft() {
    let gateway = MockGateway::new();
    let service = DashboardService::new(Arc::new(gateway.clone()), context(user_store()));

    let mut draft = JobDraft::new();
    draft.publication_date = Some(1);
    let error = service.create_job(&draft).await.unwrap_err();
    assert_eq!(error, ServiceError::Client(ClientError::MissingFields));
    assert_eq!(gateway.request_count(), 0);
}

#[tokio::test]
async fn test_create_job_rejects_unfilled_declared_input() {
    let gateway = MockGateway::new();
    gateway.on(Method::Post, endpoints::JOBS, ok_body(json!({"job_id": 1})));
    let service = DashboardService::new(Arc::new(gateway.clone()), context(user_store()));

    let mut draft = JobDraft::new();
    draft.publication_date = Some(100);
    draft.expiration_date = Some(200);
    draft.add_task(
        ServiceTaskBuilder::new()
            .with_id(5)
            .with_input("language_source", ParamType::String)
            .build(),
    );

    let error = service.create_job(&draft).await.unwrap_err();
    assert_eq!(error, ServiceError::Client(ClientError::MissingFields));
    assert_eq!(gateway.request_count(), 0);
}

#[tokio::test]
async fn test_create_job_posts_draft() {
    let gateway = MockGateway::new();
    gateway.on(Method::Post, endpoints::JOBS, ok_body(json!({"job_id": 31})));
    let service = DashboardService::new(Arc::new(gateway.clone()), context(user_store()));

    let mut draft = JobDraft::new();
    draft.publication_date = Some(100);
    draft.expiration_date = Some(200);
    let index = draft.add_task(ServiceTaskBuilder::new().with_id(5).build());
    draft
        .task_mut(index)
        .unwrap()
        .set_input("language", json!("en"));

    let created = service.create_job(&draft).await.unwrap();
    assert_eq!(created.job_id, Some(31));
    let body = gateway.last_request().unwrap().body.unwrap();
    assert_eq!(body["tasks"][0]["input"]["language"], json!("en"));
}

#[tokio::test]
async fn test_cancel_job_surfaces_server_code() {
    let gateway = MockGateway::new();
    gateway.on(Method::Delete, endpoints::job(9), error_body(-3, "already canceled"));
    let service = DashboardService::new(Arc::new(gateway), context(user_store()));

    let error = service.cancel_job(9).await.unwrap_err();
    assert_eq!(error.code(), ErrorCode::Server(ServerCode::JobAlreadyCanceled));
}

#[tokio::test]
async fn test_register_user_validation() {
    let gateway = MockGateway::new();
    let service = AdminDashboardService::new(Arc::new(gateway.clone()), context(admin_store()));

    let missing = service.register_user("Name", "", "a@b.com").await.unwrap_err();
    assert_eq!(missing, ServiceError::Client(ClientError::MissingFields));

    let invalid = service
        .register_user("Name", "user", "not-an-email")
        .await
        .unwrap_err();
    assert_eq!(invalid, ServiceError::Client(ClientError::InvalidEmail));
    assert_eq!(gateway.request_count(), 0);
}

#[tokio::test]
async fn test_register_user_returns_password() {
    let gateway = MockGateway::new();
    gateway.on(
        Method::Post,
        endpoints::ADMIN_REGISTER_USER,
        ok_body(json!({"contenet_owner_id": 3, "content_owner_password": "gen-pw"})),
    );
    let service = AdminDashboardService::new(Arc::new(gateway), context(admin_store()));

    let user = service
        .register_user("Name", "user", "user@example.com")
        .await
        .unwrap();
    assert_eq!(user.content_owner_password, "gen-pw");
    assert_eq!(user.content_owner_id, Some(3));
}

#[tokio::test]
async fn test_create_service_and_toggle() {
    let gateway = MockGateway::new();
    gateway.on(
        Method::Post,
        endpoints::ADMIN_SERVICES,
        ok_body(json!({"api_key": "key-1", "service_id": 6})),
    );
    gateway.on(Method::Put, endpoints::admin_service(6), ok_body(json!({})));
    let service = AdminDashboardService::new(Arc::new(gateway.clone()), context(admin_store()));

    assert_eq!(
        service.create_service("", "desc").await.unwrap_err(),
        ServiceError::Client(ClientError::MissingFields)
    );

    let created = service.create_service("subs", "desc").await.unwrap();
    assert_eq!(created.api_key, "key-1");

    service.set_service_availability(6, false).await.unwrap();
    let request = gateway.last_request().unwrap();
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.body.unwrap(), json!({"enable": false}));
}
