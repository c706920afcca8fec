//! In-memory storage backend.
//!
//! Implements every repository trait over a single mutex-guarded state. Used
//! by the integration tests and for running the service without PostgreSQL.
//! Constraints mirror the SQL schema: category and token names are unique.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Category, Link, NewCategory, NewLink};
use crate::domain::repositories::{
    ApiToken, CategoryRepository, LinkRepository, TokenRepository,
};
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    categories: Vec<Category>,
    links: Vec<Link>,
    tokens: Vec<ApiToken>,
    next_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal("Storage lock poisoned", json!({})))
    }

    /// Snapshot of all stored categories, oldest first.
    pub fn categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.lock()?.categories.clone())
    }

    /// Snapshot of all stored links, oldest first.
    pub fn links(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.lock()?.links.clone())
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, AppError> {
        let inner = self.lock()?;
        Ok(inner.categories.iter().find(|c| c.name == name).cloned())
    }

    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let mut inner = self.lock()?;
        if inner.categories.iter().any(|c| c.name == new_category.name) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "categories_name_key" }),
            ));
        }

        let id = inner.next_id();
        let category = Category::new(id, new_category.name, new_category.slug, Utc::now());
        inner.categories.push(category.clone());
        Ok(category)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.lock()?.categories.len() as i64)
    }
}

#[async_trait]
impl LinkRepository for MemoryStore {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.lock()?;
        if !inner.categories.iter().any(|c| c.id == new_link.category_id) {
            return Err(AppError::bad_request(
                "Referenced record does not exist",
                json!({ "constraint": "link_categories_category_id_fkey" }),
            ));
        }

        let id = inner.next_id();
        let link = Link::new(
            id,
            new_link.url,
            new_link.title,
            new_link.visible,
            new_link.category_id,
            Utc::now(),
        );
        inner.links.push(link.clone());
        Ok(link)
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Link>, AppError> {
        let inner = self.lock()?;
        Ok(inner
            .links
            .iter()
            .filter(|l| l.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.lock()?.links.len() as i64)
    }
}

#[async_trait]
impl TokenRepository for MemoryStore {
    async fn find_active_by_hash(&self, token_hash: &str) -> Result<Option<ApiToken>, AppError> {
        let inner = self.lock()?;
        Ok(inner
            .tokens
            .iter()
            .find(|t| t.token_hash == token_hash && t.revoked_at.is_none())
            .cloned())
    }

    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        let mut inner = self.lock()?;
        if let Some(token) = inner
            .tokens
            .iter_mut()
            .find(|t| t.token_hash == token_hash && t.revoked_at.is_none())
        {
            token.last_used_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn create_token(
        &self,
        name: &str,
        token_hash: &str,
        can_manage_links: bool,
    ) -> Result<ApiToken, AppError> {
        let mut inner = self.lock()?;
        if inner
            .tokens
            .iter()
            .any(|t| t.name == name || t.token_hash == token_hash)
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "api_tokens" }),
            ));
        }

        let token = ApiToken {
            id: inner.next_id(),
            name: name.to_string(),
            token_hash: token_hash.to_string(),
            can_manage_links,
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        };
        inner.tokens.push(token.clone());
        Ok(token)
    }

    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError> {
        let inner = self.lock()?;
        Ok(inner.tokens.iter().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ApiToken>, AppError> {
        let inner = self.lock()?;
        Ok(inner.tokens.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ApiToken>, AppError> {
        let inner = self.lock()?;
        Ok(inner.tokens.iter().find(|t| t.name == name).cloned())
    }

    async fn revoke_token(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.lock()?;
        match inner
            .tokens
            .iter_mut()
            .find(|t| t.id == id && t.revoked_at.is_none())
        {
            Some(token) => {
                token.revoked_at = Some(Utc::now());
                Ok(())
            }
            None => Err(AppError::not_found(
                "Token not found or already revoked",
                json!({"id": id}),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_category(name: &str) -> NewCategory {
        NewCategory {
            name: name.to_string(),
            slug: name.to_lowercase(),
        }
    }

    #[tokio::test]
    async fn test_category_names_are_unique() {
        let store = MemoryStore::new();
        CategoryRepository::create(&store, new_category("News"))
            .await
            .unwrap();

        let err = CategoryRepository::create(&store, new_category("News"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(CategoryRepository::count(&store).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_links_listed_per_category() {
        let store = MemoryStore::new();
        let news = CategoryRepository::create(&store, new_category("News"))
            .await
            .unwrap();
        let tech = CategoryRepository::create(&store, new_category("Tech"))
            .await
            .unwrap();

        for (url, category_id) in [
            ("https://a.com", news.id),
            ("https://b.com", tech.id),
            ("https://c.com", news.id),
        ] {
            LinkRepository::create(
                &store,
                NewLink {
                    url: url.to_string(),
                    title: url.to_string(),
                    category_id,
                    visible: true,
                },
            )
            .await
            .unwrap();
        }

        let urls: Vec<String> = store
            .list_by_category(news.id)
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.url)
            .collect();
        assert_eq!(urls, vec!["https://a.com", "https://c.com"]);
        assert_eq!(LinkRepository::count(&store).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_link_requires_existing_category() {
        let store = MemoryStore::new();
        let err = LinkRepository::create(
            &store,
            NewLink {
                url: "https://a.com".to_string(),
                title: "A".to_string(),
                category_id: 42,
                visible: true,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_revoked_token_is_inactive() {
        let store = MemoryStore::new();
        let token = store.create_token("ci", "hash", true).await.unwrap();

        assert!(store.find_active_by_hash("hash").await.unwrap().is_some());
        store.revoke_token(token.id).await.unwrap();
        assert!(store.find_active_by_hash("hash").await.unwrap().is_none());

        let err = store.revoke_token(token.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
