use axum::http::HeaderMap;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use easytv::app::Application;
use easytv::cli::{AdminActions, AdminCommands, Commands, JobsActions, JobsCommands};
use easytv_core::{ApiConfig, AppConfig, StorageConfig};
use easytv_domain::api::{endpoints, SESSION_HEADER};
use easytv_domain::routes::Route;
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::net::TcpListener;

fn token(headers: &HeaderMap) -> Option<&str> {
    headers.get(SESSION_HEADER).and_then(|v| v.to_str().ok())
}

async fn login(Json(body): Json<Value>) -> Json<Value> {
    match body["username"].as_str() {
        Some("owner") => Json(json!({"code": 200, "session_token": "owner-token"})),
        Some("root") => Json(json!({"code": 200, "session_token": "root-token", "is_admin": true})),
        _ => Json(json!({"code": -401, "description": "Wrong credentials"})),
    }
}

async fn logout() -> Json<Value> {
    Json(json!({"code": 200}))
}

async fn jobs(headers: HeaderMap) -> Json<Value> {
    if token(&headers) != Some("owner-token") {
        return Json(json!({"code": -401, "description": "No session"}));
    }
    Json(json!({
        "code": 200,
        "jobs": [{
            "id": 1,
            "publication_date": 1709596800,
            "expiration_date": 1710201600,
            "tasks": [{"task_id": 1, "task_name": "subtitles"}],
            "status": "running",
            "is_completed": false,
            "is_canceled": false
        }]
    }))
}

async fn admin_services(headers: HeaderMap) -> Json<Value> {
    if token(&headers) != Some("root-token") {
        return Json(json!({"code": -401, "description": "No session"}));
    }
    Json(json!({
        "code": 200,
        "services": [{"id": 4, "name": "sign", "description": "", "enabled": true, "tasks": []}]
    }))
}

async fn toggle(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({"code": 200, "description": body["enable"].to_string()}))
}

async fn spawn_api() -> String {
    let app = Router::new()
        .route(endpoints::LOGIN, post(login))
        .route(endpoints::LOGOUT, delete(logout))
        .route(endpoints::JOBS, get(jobs))
        .route(endpoints::ADMIN_SERVICES, get(admin_services))
        .route(&endpoints::admin_service(4), axum::routing::put(toggle));
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let address = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Failed to start test server");
    });
    address
}

fn config(base_url: &str, dir: &TempDir) -> AppConfig {
    AppConfig {
        api: ApiConfig {
            base_url: base_url.to_string(),
            request_timeout_seconds: 5,
        },
        storage: StorageConfig {
            directory: dir.path().to_string_lossy().into_owned(),
        },
        ..AppConfig::default()
    }
}

fn login_command(username: &str) -> Commands {
    Commands::Login {
        username: username.to_string(),
        password: "pw".to_string(),
    }
}

#[tokio::test]
async fn test_session_persists_between_runs() {
    let base = spawn_api().await;
    let dir = TempDir::new().unwrap();
    let config = config(&base, &dir);

    let first = Application::new(&config, true).unwrap();
    assert!(first.run(login_command("owner")).await.unwrap());
    assert!(dir.path().join("session.json").exists());

    // a fresh process picks the session up from disk
    let second = Application::new(&config, true).unwrap();
    assert_eq!(second.state().navigator.current(), Route::dashboard());
    let listed = second
        .run(Commands::Jobs(JobsCommands {
            action: JobsActions::List { all: false },
        }))
        .await
        .unwrap();
    assert!(listed);

    assert!(second.run(Commands::Logout).await.unwrap());
    assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn test_failed_login_reports_failure() {
    let base = spawn_api().await;
    let dir = TempDir::new().unwrap();
    let app = Application::new(&config(&base, &dir), true).unwrap();

    assert!(!app.run(login_command("nobody")).await.unwrap());
    assert!(!app.state().session.is_authenticated());
}

#[tokio::test]
async fn test_owner_cannot_enter_admin_pages() {
    let base = spawn_api().await;
    let dir = TempDir::new().unwrap();
    let app = Application::new(&config(&base, &dir), true).unwrap();
    app.run(login_command("owner")).await.unwrap();

    let result = app
        .run(Commands::Admin(AdminCommands {
            action: AdminActions::Services,
        }))
        .await;
    assert!(result.is_err());
    assert_eq!(app.state().navigator.current(), Route::dashboard());
}

#[tokio::test]
async fn test_admin_disables_service_with_auto_confirm() {
    let base = spawn_api().await;
    let dir = TempDir::new().unwrap();
    let app = Application::new(&config(&base, &dir), true).unwrap();
    app.run(login_command("root")).await.unwrap();

    let disabled = app
        .run(Commands::Admin(AdminCommands {
            action: AdminActions::Disable { service_id: 4 },
        }))
        .await
        .unwrap();
    assert!(disabled);

    // already enabled: nothing to do
    let enabled = app
        .run(Commands::Admin(AdminCommands {
            action: AdminActions::Enable { service_id: 4 },
        }))
        .await
        .unwrap();
    assert!(enabled);
}
