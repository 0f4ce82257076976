mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use short_alias::api::handlers::health_handler;

fn app(state: short_alias::AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let pool = common::test_pool().await;
    let server = TestServer::new(app(common::create_test_state(&pool).await)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let pool = common::test_pool().await;
    let server = TestServer::new(app(common::create_test_state(&pool).await)).unwrap();

    pool.close().await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
