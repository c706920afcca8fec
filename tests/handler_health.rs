mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use link_importer::domain::entities::{Category, NewCategory};
use link_importer::domain::repositories::CategoryRepository;
use link_importer::error::AppError;
use link_importer::infrastructure::persistence::MemoryStore;
use link_importer::state::AppState;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _store) = common::create_test_state().await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let (state, _store) = common::create_test_state().await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/health").await;

    assert_ne!(response.status_code(), StatusCode::UNAUTHORIZED);
}

struct UnreachableCategories;

#[async_trait]
impl CategoryRepository for UnreachableCategories {
    async fn find_by_name(&self, _name: &str) -> Result<Option<Category>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn create(&self, _new_category: NewCategory) -> Result<Category, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(
        Arc::new(UnreachableCategories),
        store.clone(),
        store,
        common::SIGNING_SECRET.to_string(),
    );
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
}
