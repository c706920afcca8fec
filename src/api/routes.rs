//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::import_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST /import` - Bulk import links from CSV-like text
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/import", post(import_handler))
}
