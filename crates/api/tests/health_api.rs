//! Integration tests for the health endpoint and cross-cutting HTTP
//! behaviour: 404 fallback, request ids, CORS preflight.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_ok_when_db_is_reachable(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_path_is_a_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/nope/never/existed").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn every_response_carries_a_request_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let value = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header must be set")
        .to_str()
        .unwrap()
        .to_owned();
    assert!(
        Uuid::parse_str(&value).is_ok(),
        "x-request-id should be a UUID, got {value:?}"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cors_preflight_allows_the_configured_origin(pool: PgPool) {
    let app = common::build_test_app(pool);

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/images")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "authorization")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(preflight).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .expect("allow-origin header missing"),
        "http://localhost:5173"
    );
    let methods = headers
        .get("access-control-allow-methods")
        .expect("allow-methods header missing")
        .to_str()
        .unwrap();
    assert!(methods.contains("GET"), "GET missing from {methods:?}");
}
