//! Startup path: settings -> migrated database -> router

use axum::body::Body;
use axum::http::{Request, StatusCode};
use inkpost_core::logging_facility::Profile;
use inkpost_core_types::Sensitive;
use inkpost_server::configuration::{
    DatabaseSettings, LoggingSettings, ServerSettings, SessionSettings,
};
use inkpost_server::{Server, Settings};
use tempfile::TempDir;
use tower::ServiceExt;

fn settings(dir: &TempDir) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
        },
        database: DatabaseSettings {
            path: dir.path().join("nested.db"),
            pool_size: 2,
        },
        session: SessionSettings {
            secret_key: Sensitive::new("k".to_string()),
        },
        logging: LoggingSettings {
            profile: Profile::Test,
        },
    }
}

#[tokio::test]
async fn test_new_server_migrates_and_serves_home() {
    let dir = TempDir::new().unwrap();
    let server = Server::new(settings(&dir)).unwrap();

    let conn = inkpost_store::db::open(dir.path().join("nested.db")).unwrap();
    let applied = inkpost_store::migrations::applied_migrations(&conn).unwrap();
    assert_eq!(applied, vec!["001_initial_schema".to_string()]);

    let response = server
        .router()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let dir = TempDir::new().unwrap();
    let server = Server::new(settings(&dir)).unwrap();

    let response = server
        .router()
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
