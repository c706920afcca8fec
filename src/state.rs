//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::{AuthService, DynImportService};
use crate::domain::repositories::{CategoryRepository, LinkRepository, TokenRepository};

/// Services shared by every request.
///
/// Repositories are held as trait objects, so the same state works over
/// PostgreSQL and over [`crate::infrastructure::persistence::MemoryStore`].
#[derive(Clone)]
pub struct AppState {
    pub import_service: Arc<DynImportService>,
    pub auth_service: Arc<AuthService<dyn TokenRepository>>,
}

impl AppState {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        links: Arc<dyn LinkRepository>,
        tokens: Arc<dyn TokenRepository>,
        token_signing_secret: String,
    ) -> Self {
        Self {
            import_service: Arc::new(DynImportService::new(categories, links)),
            auth_service: Arc::new(AuthService::new(tokens, token_signing_secret)),
        }
    }
}
