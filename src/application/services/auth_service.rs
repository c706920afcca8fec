//! Authentication service for API token validation.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{Caller, Permission};
use crate::domain::repositories::{ApiToken, TokenRepository};
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Service for authenticating API requests via Bearer tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before storage
/// and comparison. An attacker with read-only access to the database cannot verify
/// or forge tokens without the server-side secret.
pub struct AuthService<R: TokenRepository + ?Sized> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: TokenRepository + ?Sized> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - token repository for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when tokens were created
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    pub fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Authenticates a raw token and returns the caller it stands for.
    ///
    /// On successful authentication, updates the `last_used` timestamp for
    /// monitoring and audit purposes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if:
    /// - Token hash does not match any stored credentials
    /// - Token has been revoked
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<Caller, AppError> {
        let token_hash = self.hash_token(token);

        let Some(api_token) = self.repository.find_active_by_hash(&token_hash).await? else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid or revoked token"}),
            ));
        };

        if let Err(e) = self.repository.update_last_used(&token_hash).await {
            tracing::warn!(error = %e, token = %api_token.name, "failed to update token last_used_at");
        }

        Ok(caller_for(&api_token))
    }

    /// Creates a token from a raw value, storing only its hash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name or token is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn issue_token(
        &self,
        name: &str,
        raw_token: &str,
        can_manage_links: bool,
    ) -> Result<ApiToken, AppError> {
        let token_hash = self.hash_token(raw_token);
        self.repository
            .create_token(name, &token_hash, can_manage_links)
            .await
    }
}

/// Maps a stored token to the caller it authenticates.
fn caller_for(token: &ApiToken) -> Caller {
    let mut permissions = Vec::new();
    if token.can_manage_links {
        permissions.push(Permission::ManageLinks);
    }
    Caller::new(token.name.clone(), permissions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTokenRepository;
    use chrono::Utc;

    fn test_secret() -> String {
        "test-signing-secret".to_string()
    }

    fn compute_expected_hash(token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(test_secret().as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn api_token(name: &str, can_manage_links: bool) -> ApiToken {
        ApiToken {
            id: 1,
            name: name.to_string(),
            token_hash: "hash".to_string(),
            can_manage_links,
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        }
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut mock_repo = MockTokenRepository::new();

        let token = "valid-token";
        let expected_hash = compute_expected_hash(token);

        mock_repo
            .expect_find_active_by_hash()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(|_| Ok(Some(api_token("Importer", true))));

        mock_repo
            .expect_update_last_used()
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let caller = service.authenticate(token).await.unwrap();

        assert_eq!(caller.name, "Importer");
        assert!(caller.has_permission(Permission::ManageLinks));
    }

    #[tokio::test]
    async fn test_authenticate_read_only_token() {
        let mut mock_repo = MockTokenRepository::new();

        mock_repo
            .expect_find_active_by_hash()
            .times(1)
            .returning(|_| Ok(Some(api_token("Viewer", false))));
        mock_repo
            .expect_update_last_used()
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let caller = service.authenticate("viewer-token").await.unwrap();

        assert!(!caller.has_permission(Permission::ManageLinks));
    }

    #[tokio::test]
    async fn test_authenticate_invalid_token() {
        let mut mock_repo = MockTokenRepository::new();

        mock_repo
            .expect_find_active_by_hash()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_update_last_used().times(0);

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let result = service.authenticate("invalid-token").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_last_used_failure_does_not_reject() {
        let mut mock_repo = MockTokenRepository::new();

        mock_repo
            .expect_find_active_by_hash()
            .times(1)
            .returning(|_| Ok(Some(api_token("Importer", true))));
        mock_repo
            .expect_update_last_used()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        assert!(service.authenticate("valid-token").await.is_ok());
    }

    #[tokio::test]
    async fn test_issue_token_stores_hash() {
        let mut mock_repo = MockTokenRepository::new();

        let expected_hash = compute_expected_hash("raw-value");
        mock_repo
            .expect_create_token()
            .withf(move |name, hash, can_manage_links| {
                name == "CI" && hash == expected_hash && !*can_manage_links
            })
            .times(1)
            .returning(|name, hash, can_manage_links| {
                Ok(ApiToken {
                    id: 2,
                    name: name.to_string(),
                    token_hash: hash.to_string(),
                    can_manage_links,
                    created_at: Utc::now(),
                    last_used_at: None,
                    revoked_at: None,
                })
            });

        let service = AuthService::new(Arc::new(mock_repo), test_secret());
        let token = service.issue_token("CI", "raw-value", false).await.unwrap();

        assert_eq!(token.id, 2);
        assert_ne!(token.token_hash, "raw-value");
    }

    #[tokio::test]
    async fn test_hash_token_consistency() {
        let mock_repo = MockTokenRepository::new();
        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let hash1 = service.hash_token("test-token");
        let hash2 = service.hash_token("test-token");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[tokio::test]
    async fn test_hash_token_secret_matters() {
        let svc1 = AuthService::new(Arc::new(MockTokenRepository::new()), "secret-a".to_string());
        let svc2 = AuthService::new(Arc::new(MockTokenRepository::new()), "secret-b".to_string());

        assert_ne!(svc1.hash_token("token"), svc2.hash_token("token"));
    }
}
