//! Integration tests for the catalog proxy, with the external API mocked
//! by wiremock.

mod common;

use axum::http::StatusCode;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn search_body() -> serde_json::Value {
    json!({
        "keyword": "matrix",
        "films": [
            {
                "filmId": 301,
                "nameRu": "Матрица",
                "nameEn": "The Matrix",
                "rating": "8.5",
                "year": "1999",
                "countries": [{ "country": "USA" }],
                "posterUrl": "https://posters.example/301.jpg",
                "filmLength": "2:16"
            },
            {
                "filmId": 302,
                "nameEn": "The Matrix Reloaded",
                "rating": "7.7",
                "year": "2003",
                "countries": [{ "country": "USA" }],
                "posterUrl": "https://posters.example/302.jpg"
            }
        ]
    })
}

#[tokio::test]
async fn search_projects_expected_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2.1/films/search-by-keyword"))
        .and(query_param("keyword", "matrix"))
        .and(header("X-API-KEY", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
        .mount(&server)
        .await;

    let app = test_app_with_catalog(&server.uri()).await;
    let token = login_token(&app, "alice", "pw1").await;

    let (status, body) = send(
        &app,
        authed_request("GET", "/movies/search?query=matrix", &token, None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let films = body.as_array().unwrap();
    assert_eq!(films.len(), 2);
    assert_eq!(films[0]["film_id"], 301);
    assert_eq!(films[0]["rating"], "8.5");
    assert_eq!(films[0]["year"], "1999");
    assert_eq!(films[0]["countries"], json!([{ "country": "USA" }]));
    assert_eq!(films[0]["poster_url"], "https://posters.example/301.jpg");
    // Fields outside the projection are dropped.
    assert!(films[0].get("nameEn").is_none());
}

#[tokio::test]
async fn search_degrades_to_empty_on_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2.1/films/search-by-keyword"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let app = test_app_with_catalog(&server.uri()).await;
    let token = login_token(&app, "alice", "pw1").await;

    let (status, body) = send(
        &app,
        authed_request("GET", "/movies/search?query=matrix", &token, None),
    )
    .await;

    // Unavailable, not an error: empty list with a success status.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn search_degrades_to_empty_when_unreachable() {
    // Closed port: transport error rather than an HTTP status.
    let app = test_app().await;
    let token = login_token(&app, "alice", "pw1").await;

    let (status, body) = send(
        &app,
        authed_request("GET", "/movies/search?query=matrix", &token, None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn details_pass_through_raw_record() {
    let record = json!({
        "kinopoiskId": 301,
        "nameEn": "The Matrix",
        "ratingImdb": 8.7,
        "webUrl": "https://films.example/301"
    });

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2.2/films/301"))
        .and(header("X-API-KEY", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record.clone()))
        .mount(&server)
        .await;

    let app = test_app_with_catalog(&server.uri()).await;
    let token = login_token(&app, "alice", "pw1").await;

    let (status, body) = send(&app, authed_request("GET", "/movies?id=301", &token, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, record);
}

#[tokio::test]
async fn details_null_on_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2.2/films/301"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such film"))
        .mount(&server)
        .await;

    let app = test_app_with_catalog(&server.uri()).await;
    let token = login_token(&app, "alice", "pw1").await;

    let (status, body) = send(&app, authed_request("GET", "/movies?id=301", &token, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::Value::Null);
}

#[tokio::test]
async fn catalog_routes_require_authentication() {
    let app = test_app().await;

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/movies/search?query=matrix")
        .body(axum::body::Body::empty())
        .unwrap();

    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
