//! Test app construction and request helpers
//!
//! Builds a full router over an in-memory database and drives it with
//! `tower::ServiceExt::oneshot`, so the tests exercise the same extractor
//! and error-conversion paths as production requests.

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, StatusCode};
use axum::Router;
use jsonwebtoken::Algorithm;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use starfilm::auth::tokens::TokenConfig;
use starfilm::catalog::client::CatalogClient;
use starfilm::routes::create_router;
use starfilm::server::config::CatalogConfig;
use starfilm::server::state::AppState;

use super::database::create_test_pool;

pub const TEST_SECRET: &str = "test-secret";

/// A router plus a handle on its database for direct assertions.
pub struct TestApp {
    pub router: Router<()>,
    pub pool: SqlitePool,
}

/// Build a test app. The catalog base URL points at a closed port unless
/// a wiremock server address is supplied.
pub async fn test_app_with_catalog(catalog_base_url: &str) -> TestApp {
    let pool = create_test_pool().await;
    let tokens = TokenConfig::new(TEST_SECRET, Algorithm::HS256);
    let catalog = CatalogClient::new(&CatalogConfig {
        base_url: catalog_base_url.to_string(),
        api_key: "test-api-key".to_string(),
    });

    let router = create_router(AppState::new(pool.clone(), tokens, catalog));
    TestApp { router, pool }
}

pub async fn test_app() -> TestApp {
    test_app_with_catalog("http://127.0.0.1:9").await
}

/// Send a request and return (status, parsed JSON body).
pub async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .router
        .clone()
        .oneshot(request)
        .await
        .expect("request failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");

    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn authed_request(method: &str, uri: &str, token: &str, body: Option<&Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"));

    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn register(app: &TestApp, username: &str, password: &str) -> (StatusCode, Value) {
    let body = serde_json::json!({ "username": username, "password": password });
    send(app, json_request("POST", "/register", &body)).await
}

pub async fn login(app: &TestApp, username: &str, password: &str) -> (StatusCode, Value) {
    let form = format!("username={username}&password={password}");
    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap();
    send(app, request).await
}

/// Register and log in, returning a usable bearer token.
pub async fn login_token(app: &TestApp, username: &str, password: &str) -> String {
    let (status, _) = register(app, username, password).await;
    assert_eq!(status, StatusCode::OK, "registration failed");

    let (status, body) = login(app, username, password).await;
    assert_eq!(status, StatusCode::OK, "login failed");
    body["access_token"].as_str().expect("no token").to_string()
}

/// Sample film payload keyed by catalog id.
pub fn film_payload(film_id: i64) -> Value {
    serde_json::json!({
        "film_id": film_id,
        "film_name": format!("Film {film_id}"),
        "year": 1999,
        "imdb_id": 100_000 + film_id,
        "film_length": 136,
        "film_poster": format!("https://posters.example/{film_id}.jpg"),
        "film_link": format!("https://films.example/{film_id}"),
    })
}
