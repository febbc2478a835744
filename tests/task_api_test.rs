use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use taskserver::config::{AppConfig, DatabaseConfig, ServerConfig};
use taskserver::shared::state::AppState;
use taskserver::shared::utils::{create_conn, run_migrations};
use taskserver::tasks::task_api::task_routes;

fn test_app() -> (TempDir, Router) {
    let dir = TempDir::new().expect("tempdir");
    let db_path = dir.path().join("tasks.db");
    let url = db_path.to_str().unwrap().to_string();
    let pool = create_conn(&url).expect("pool");
    run_migrations(&pool).expect("migrations");
    let config = AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig { url },
    };
    let state = Arc::new(AppState::new(pool, config));
    (dir, task_routes().with_state(state))
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn get_body(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn create_redirects_and_lists_task() {
    let (_dir, app) = test_app();

    let response = app
        .clone()
        .oneshot(form_post("/", "content=Buy+milk&complete=0&duedate=2026-09-01"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let (status, body) = get_body(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Buy milk"));
    assert!(body.contains("2026-09-01"));
}

#[tokio::test]
async fn edit_replaces_content_at_same_id() {
    let (_dir, app) = test_app();

    app.clone()
        .oneshot(form_post("/", "content=Buy+milk&complete=0&duedate="))
        .await
        .unwrap();

    let (status, body) = get_body(&app, "/edit/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"value="Buy milk""#));

    let response = app
        .clone()
        .oneshot(form_post("/edit/1", "content=Buy+bread&complete=1&duedate="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (_, body) = get_body(&app, "/").await;
    assert!(body.contains("Buy bread"));
    assert!(!body.contains("Buy milk"));
    assert!(body.contains(r#"href="/edit/1""#));
}

#[tokio::test]
async fn delete_removes_task_from_listing() {
    let (_dir, app) = test_app();

    app.clone()
        .oneshot(form_post("/", "content=throwaway&complete=0&duedate="))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/delete/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (_, body) = get_body(&app, "/").await;
    assert!(!body.contains("throwaway"));
    assert!(body.contains("No tasks yet."));
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let (_dir, app) = test_app();
    let (status, _) = get_body(&app, "/delete/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_unknown_id_is_404() {
    let (_dir, app) = test_app();
    let (status, _) = get_body(&app, "/edit/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_due_date_is_400_with_message() {
    let (_dir, app) = test_app();
    let response = app
        .clone()
        .oneshot(form_post("/", "content=oops&complete=0&duedate=not-a-date"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("not-a-date"));
}

#[tokio::test]
async fn empty_content_is_400() {
    let (_dir, app) = test_app();
    let response = app
        .clone()
        .oneshot(form_post("/", "content=&complete=0&duedate="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_is_ordered_by_id() {
    let (_dir, app) = test_app();
    for content in ["alpha", "beta", "gamma"] {
        app.clone()
            .oneshot(form_post("/", &format!("content={content}&complete=0&duedate=")))
            .await
            .unwrap();
    }
    let (_, body) = get_body(&app, "/").await;
    let a = body.find("alpha").unwrap();
    let b = body.find("beta").unwrap();
    let c = body.find("gamma").unwrap();
    assert!(a < b && b < c);
}
