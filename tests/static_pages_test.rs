use ats_backend::{build_router, AppState, InMemoryUserStore};
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tempfile::TempDir;
use tower::ServiceExt;

fn site() -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("register.html"), "<h1>Register</h1>").unwrap();
    std::fs::write(dir.path().join("login.html"), "<h1>Login</h1>").unwrap();
    std::fs::write(dir.path().join("style.css"), "body {}").unwrap();

    let router = build_router(AppState::new(InMemoryUserStore::new(), dir.path()));
    (dir, router)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let (status, content_type, bytes) = get_bytes(app, uri).await;
    (status, content_type, String::from_utf8(bytes).unwrap())
}

async fn get_bytes(app: &Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, bytes.to_vec())
}

#[tokio::test]
async fn test_root_serves_register_page() {
    let (_dir, app) = site();

    let (status, content_type, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert_eq!(body, "<h1>Register</h1>");
}

#[tokio::test]
async fn test_html_pages_are_served() {
    let (_dir, app) = site();

    let (status, _, body) = get(&app, "/login.html").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<h1>Login</h1>");
}

#[tokio::test]
async fn test_non_html_files_are_hidden() {
    let (_dir, app) = site();

    let (status, _, body) = get(&app, "/style.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Not Found");
}

#[tokio::test]
async fn test_missing_html_page_is_json_404() {
    let (_dir, app) = site();

    let (status, content_type, body) = get(&app, "/jobs.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, r#"{"error":"Not Found"}"#);
}

#[tokio::test]
async fn test_traversal_is_rejected() {
    let (dir, app) = site();
    let parent = dir.path().parent().unwrap();
    let name = format!(
        "{}-outside.html",
        dir.path().file_name().unwrap().to_str().unwrap()
    );
    let outside = parent.join(&name);
    std::fs::write(&outside, "<h1>Outside</h1>").unwrap();

    let (status, _, body) = get(&app, &format!("/%2E%2E/{}", name)).await;
    std::fs::remove_file(&outside).unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.contains("Outside"));
}

#[tokio::test]
async fn test_non_utf8_page_is_served_verbatim() {
    let (dir, app) = site();
    let latin = b"<p>caf\xe9</p>".to_vec();
    std::fs::write(dir.path().join("latin.html"), &latin).unwrap();

    let (status, content_type, body) = get_bytes(&app, "/latin.html").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert_eq!(body, latin);
}

#[tokio::test]
async fn test_directory_named_html_is_404() {
    let (dir, app) = site();
    std::fs::create_dir(dir.path().join("folder.html")).unwrap();

    let (status, _, body) = get(&app, "/folder.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"Not Found"}"#);
}

#[tokio::test]
async fn test_missing_index_page_is_404() {
    let dir = TempDir::new().unwrap();
    let app = build_router(AppState::new(InMemoryUserStore::new(), dir.path()));

    let (status, _, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"Not Found"}"#);
}
