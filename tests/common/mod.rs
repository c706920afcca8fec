#![allow(dead_code)]

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use link_importer::api::handlers::{health_handler, import_handler};
use link_importer::api::middleware::auth;
use link_importer::infrastructure::persistence::MemoryStore;
use link_importer::state::AppState;

pub const SIGNING_SECRET: &str = "test-signing-secret";
pub const IMPORT_TOKEN: &str = "import-token-value";
pub const READ_ONLY_TOKEN: &str = "read-only-token-value";

/// Application state over a fresh in-memory store, with one importing and
/// one read-only token issued.
pub async fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(
        store.clone(),
        store.clone(),
        store.clone(),
        SIGNING_SECRET.to_string(),
    );

    state
        .auth_service
        .issue_token("importer", IMPORT_TOKEN, true)
        .await
        .unwrap();
    state
        .auth_service
        .issue_token("viewer", READ_ONLY_TOKEN, false)
        .await
        .unwrap();

    (state, store)
}

/// Import and health routes with bearer auth on the import route.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/api/import", post(import_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .route("/health", get(health_handler))
        .with_state(state)
}
